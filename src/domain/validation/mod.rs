//! Declarative field rules evaluated by a generic validator.
//!
//! A [`FormSchema`] is a list of [`FieldRule`]s. Each rule is checked in a fixed
//! order (required, max length, min length, pattern) and only the first failure
//! of a field is reported.

pub mod join_schema;
pub mod messages;

use std::collections::BTreeMap;

use regex::Regex;

use crate::domain::{error::DomainError, models::join_form::JoinForm};

pub use messages::ValidationMessages;

/// Fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    UserId,
    Password,
    ConfirmPassword,
    Email,
    Phone,
    Location,
    Avatar,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Username,
        Field::UserId,
        Field::Password,
        Field::ConfirmPassword,
        Field::Email,
        Field::Phone,
        Field::Location,
        Field::Avatar,
    ];

    /// Name used on the wire and in form state
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::UserId => "userId",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Location => "location",
            Field::Avatar => "avatar",
        }
    }
}

/// Field-level error messages, at most one per field
pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone)]
pub struct LengthBound {
    pub value: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct PatternRule {
    pub regex: Regex,
    /// Classes that must each match somewhere in the value
    pub must_contain: Vec<Regex>,
    pub message: String,
}

impl PatternRule {
    fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value) && self.must_contain.iter().all(|class| class.is_match(value))
    }
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: Field,
    pub required: Option<String>,
    pub strip_whitespace: bool,
    pub min_length: Option<LengthBound>,
    pub max_length: Option<LengthBound>,
    pub pattern: Option<PatternRule>,
}

impl FieldRule {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            required: None,
            strip_whitespace: false,
            min_length: None,
            max_length: None,
            pattern: None,
        }
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn strip_whitespace(mut self) -> Self {
        self.strip_whitespace = true;
        self
    }

    pub fn min_length(mut self, value: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(LengthBound {
            value,
            message: message.into(),
        });
        self
    }

    pub fn max_length(mut self, value: usize, message: impl Into<String>) -> Self {
        self.max_length = Some(LengthBound {
            value,
            message: message.into(),
        });
        self
    }

    pub fn pattern(mut self, regex: &str, message: impl Into<String>) -> Result<Self, DomainError> {
        self.pattern = Some(PatternRule {
            regex: Regex::new(regex)?,
            must_contain: Vec::new(),
            message: message.into(),
        });
        Ok(self)
    }

    /// Add a class the pattern additionally requires. Must follow [`FieldRule::pattern`].
    pub fn must_contain(mut self, class: &str) -> Result<Self, DomainError> {
        let class = Regex::new(class)?;
        let pattern = self
            .pattern
            .as_mut()
            .ok_or(DomainError::MissingPattern(self.field.name()))?;
        pattern.must_contain.push(class);
        Ok(self)
    }

    /// Value as it is stored after the field's transform
    pub fn normalize(&self, raw: &str) -> String {
        if self.strip_whitespace {
            raw.chars().filter(|c| !c.is_whitespace()).collect()
        } else {
            raw.to_string()
        }
    }

    /// Check an already normalized value, returning the first failing rule's message
    pub fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            return match &self.required {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            };
        }

        let length = value.chars().count();
        if let Some(max) = &self.max_length
            && length > max.value
        {
            return Err(max.message.clone());
        }
        if let Some(min) = &self.min_length
            && length < min.value
        {
            return Err(min.message.clone());
        }
        if let Some(pattern) = &self.pattern
            && !pattern.matches(value)
        {
            return Err(pattern.message.clone());
        }
        Ok(())
    }
}

/// Form whose fields passed every rule of a schema, with transforms applied
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm(JoinForm);

impl ValidatedForm {
    pub fn form(&self) -> &JoinForm {
        &self.0
    }

    pub fn into_inner(self) -> JoinForm {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct FormSchema {
    rules: Vec<FieldRule>,
    avatar_message: Option<String>,
}

impl FormSchema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self {
            rules,
            avatar_message: None,
        }
    }

    /// Reject avatar files that are not images
    pub fn image_avatar(mut self, message: impl Into<String>) -> Self {
        self.avatar_message = Some(message.into());
        self
    }

    pub fn rule(&self, field: Field) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    pub fn validate(&self, form: &JoinForm) -> Result<ValidatedForm, FieldErrors> {
        let mut normalized = form.clone();
        let mut errors = FieldErrors::new();

        for rule in &self.rules {
            let Some(slot) = text_field_mut(&mut normalized, rule.field) else {
                continue;
            };
            *slot = rule.normalize(slot);
            if let Err(message) = rule.check(slot) {
                errors.insert(rule.field, message);
            }
        }

        if let (Some(message), Some(avatar)) = (&self.avatar_message, &form.avatar)
            && !avatar.is_image()
        {
            errors.insert(Field::Avatar, message.clone());
        }

        if errors.is_empty() {
            Ok(ValidatedForm(normalized))
        } else {
            Err(errors)
        }
    }
}

fn text_field_mut(form: &mut JoinForm, field: Field) -> Option<&mut String> {
    match field {
        Field::Username => Some(&mut form.username),
        Field::UserId => Some(&mut form.user_id),
        Field::Password => Some(&mut form.password),
        Field::ConfirmPassword => Some(&mut form.confirm_password),
        Field::Email => Some(&mut form.email),
        Field::Phone => Some(&mut form.phone),
        Field::Location => Some(&mut form.location),
        Field::Avatar => None,
    }
}
