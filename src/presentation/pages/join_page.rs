//! View-model of the registration page.
//!
//! Holds the form while the user edits it and drives a submission through
//! [`RegisterUserUsecase`]. Only one submission may be in flight; tearing the
//! page down cancels it before any state is touched.

use std::sync::{Mutex, MutexGuard, PoisonError};

use base64::{Engine as _, engine::general_purpose};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{
    domain::{
        error::DomainError,
        models::{
            join_form::{AvatarFile, JoinForm},
            join_status::JoinStatus,
        },
        repositories::{image_repository::ImageRepository, user_repository::UserRepository},
        services::navigation_service::{Navigator, Route},
        validation::{Field, FieldErrors, FormSchema, ValidationMessages},
    },
    presentation::messages::PageText,
    usecase::register_user_usecase::{JoinOutcome, RegisterUserUsecase},
};

/// Everything the page renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub form: JoinForm,
    pub errors: FieldErrors,
    pub status: JoinStatus,
    pub message: Option<String>,
    pub error_message: Option<String>,
    pub avatar_preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight
    Ignored,
    Invalid(FieldErrors),
    Rejected,
    Failed,
    Redirected(Route),
    Cancelled,
}

pub struct JoinPage<U: UserRepository, I: ImageRepository, N: Navigator> {
    usecase: RegisterUserUsecase<U, I>,
    navigator: N,
    login_route: Route,
    schema: FormSchema,
    messages: ValidationMessages,
    text: PageText,
    state: Mutex<PageState>,
    cancel: CancellationToken,
}

impl<U: UserRepository, I: ImageRepository, N: Navigator> JoinPage<U, I, N> {
    pub fn new(
        usecase: RegisterUserUsecase<U, I>,
        navigator: N,
        login_route: Route,
    ) -> Result<Self, DomainError> {
        let messages = ValidationMessages::default();
        Ok(Self {
            usecase,
            navigator,
            login_route,
            schema: FormSchema::join(&messages)?,
            messages,
            text: PageText::default(),
            state: Mutex::new(PageState::default()),
            cancel: CancellationToken::new(),
        })
    }

    /// Replace the built-in Korean text
    pub fn localized(
        mut self,
        messages: ValidationMessages,
        text: PageText,
    ) -> Result<Self, DomainError> {
        self.schema = FormSchema::join(&messages)?;
        self.messages = messages;
        self.text = text;
        Ok(self)
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        lock_state(&self.state)
    }

    pub fn state(&self) -> PageState {
        self.lock().clone()
    }

    pub fn title(&self) -> &str {
        &self.text.title
    }

    pub fn is_loading(&self) -> bool {
        self.lock().status.is_submitting()
    }

    pub fn submit_label(&self) -> &str {
        if self.is_loading() {
            &self.text.loading
        } else {
            &self.text.submit
        }
    }

    /// Update a text field. The avatar is set through [`JoinPage::select_avatar`].
    pub fn set_value(&self, field: Field, value: impl Into<String>) {
        let mut state = self.lock();
        let form = &mut state.form;
        let slot = match field {
            Field::Username => &mut form.username,
            Field::UserId => &mut form.user_id,
            Field::Password => &mut form.password,
            Field::ConfirmPassword => &mut form.confirm_password,
            Field::Email => &mut form.email,
            Field::Phone => &mut form.phone,
            Field::Location => &mut form.location,
            Field::Avatar => return,
        };
        *slot = value.into();
    }

    /// Change the selected profile picture; the preview follows the selection
    pub fn select_avatar(&self, file: Option<AvatarFile>) {
        let mut state = self.lock();
        state.avatar_preview = file.as_ref().map(preview_url);
        state.form.avatar = file;
    }

    /// Stop any in-flight submission and refuse new ones
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.cancel.is_cancelled() {
            return SubmitOutcome::Cancelled;
        }

        let validated = {
            let mut state = self.lock();
            if let Err(e) = state.status.begin_submit() {
                debug!("submit ignored: {}", e);
                return SubmitOutcome::Ignored;
            }
            match self.schema.validate(&state.form) {
                Ok(validated) => {
                    state.errors.clear();
                    state.message = None;
                    state.error_message = None;
                    validated
                }
                Err(errors) => {
                    state.errors = errors.clone();
                    settle(&mut state.status, None);
                    return SubmitOutcome::Invalid(errors);
                }
            }
        };

        let in_flight = InFlight::new(&self.state);
        let result = tokio::select! {
            _ = self.cancel.cancelled() => None,
            result = self.usecase.join(validated) => Some(result),
        };
        in_flight.disarm();
        let Some(result) = result else {
            info!("submission cancelled by teardown");
            return SubmitOutcome::Cancelled;
        };

        let outcome = {
            let mut state = self.lock();
            match result {
                Ok(JoinOutcome::Registered { message }) => {
                    state.message = message;
                    settle(&mut state.status, Some(self.login_route.clone()));
                    SubmitOutcome::Redirected(self.login_route.clone())
                }
                Ok(JoinOutcome::Rejected {
                    message,
                    error_message,
                }) => {
                    // rejections always show some text
                    if message.is_none() && error_message.is_none() {
                        warn!("registration rejected without a message");
                        state.error_message = Some(self.text.network_error.clone());
                    } else {
                        state.message = message;
                        state.error_message = error_message;
                    }
                    settle(&mut state.status, None);
                    SubmitOutcome::Rejected
                }
                Err(DomainError::PasswordMismatch) => {
                    state
                        .errors
                        .insert(Field::ConfirmPassword, self.messages.password_mismatch.clone());
                    settle(&mut state.status, None);
                    SubmitOutcome::Invalid(state.errors.clone())
                }
                Err(e) => {
                    warn!("registration failed: {}", e);
                    state.error_message = Some(self.text.network_error.clone());
                    settle(&mut state.status, None);
                    SubmitOutcome::Failed
                }
            }
        };

        if let SubmitOutcome::Redirected(route) = &outcome {
            self.navigator.push(route);
        }
        outcome
    }
}

impl<U: UserRepository, I: ImageRepository, N: Navigator> Drop for JoinPage<U, I, N> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn lock_state(state: &Mutex<PageState>) -> MutexGuard<'_, PageState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reopens the form if a submission is dropped before it settles,
/// e.g. when the caller wraps `submit` in a timeout.
struct InFlight<'a> {
    state: &'a Mutex<PageState>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a Mutex<PageState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            debug!("submission dropped before settling");
            settle(&mut lock_state(self.state).status, None);
        }
    }
}

fn settle(status: &mut JoinStatus, redirect: Option<Route>) {
    let settled = match redirect {
        Some(route) => status.redirect(route),
        None => status.reopen(),
    };
    if let Err(e) = settled {
        warn!("unexpected page transition: {}", e);
    }
}

/// Inline `data:` url showing the selected image without any upload
pub fn preview_url(file: &AvatarFile) -> String {
    format!(
        "data:{};base64,{}",
        file.content_type(),
        general_purpose::STANDARD.encode(file.bytes())
    )
}
