use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    domain::{
        models::{
            session::{RenderContext, SessionState},
            user::User,
        },
        repositories::user_repository::UserRepository,
    },
    usecase::session_usecase::SessionUsecase,
};

struct Inner {
    context: RenderContext,
    state: SessionState,
}

/// Logged-in user exposed to the rest of the client
pub struct CurrentUser<U: UserRepository> {
    usecase: SessionUsecase<U>,
    inner: Mutex<Inner>,
}

impl<U: UserRepository> CurrentUser<U> {
    pub fn new(usecase: SessionUsecase<U>, context: RenderContext) -> Self {
        Self {
            usecase,
            inner: Mutex::new(Inner {
                context,
                state: SessionState::Loading,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    pub fn loading(&self) -> bool {
        self.lock().state.is_loading()
    }

    pub fn is_logged_in(&self) -> Option<bool> {
        self.lock().state.is_logged_in()
    }

    pub fn logged_in_user(&self) -> Option<User> {
        self.lock().state.logged_in_user().cloned()
    }

    /// Switching context drops whatever was known about the session
    pub fn set_context(&self, context: RenderContext) {
        let mut inner = self.lock();
        if inner.context != context {
            inner.context = context;
            inner.state = SessionState::Loading;
        }
    }

    /// Query the session again. A result for a context that changed meanwhile is discarded.
    pub async fn refresh(&self) -> SessionState {
        let context = self.lock().context;
        let state = self.usecase.query(context).await;

        let mut inner = self.lock();
        if inner.context == context {
            inner.state = state;
        }
        inner.state.clone()
    }
}
