//! Request validation.
//!
//! Each command implements [`Validate`] with a rule set built from [`Validator`].
//! Rules never touch the database and never short-circuit: every violated rule
//! adds its own message, formatted as `"{field}: {message}"`.

use crate::server::localization::{Localizer, MessageKey};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Implemented by every command that is checked before dispatch.
pub trait Validate {
    fn validate(&self, localizer: &Localizer) -> ValidationResult;
}

/// Accumulates rule violations for one command.
pub struct Validator<'a> {
    localizer: &'a Localizer,
    errors: Vec<String>,
}

impl<'a> Validator<'a> {
    pub fn new(localizer: &'a Localizer) -> Self {
        Self {
            localizer,
            errors: Vec::new(),
        }
    }

    /// Starts rules for a text field.
    pub fn text<'v>(&'v mut self, field: &'static str, value: &'v str) -> TextRules<'v, 'a> {
        TextRules {
            validator: self,
            field,
            value,
        }
    }

    /// Starts rules for an optional text field. Rules other than `required`
    /// are skipped when the value is absent.
    pub fn optional_text<'v>(
        &'v mut self,
        field: &'static str,
        value: Option<&'v str>,
    ) -> OptionalTextRules<'v, 'a> {
        OptionalTextRules {
            validator: self,
            field,
            value,
        }
    }

    /// Starts rules for a numeric field.
    pub fn number<'v, N>(&'v mut self, field: &'static str, value: N) -> NumberRules<'v, 'a, N>
    where
        N: PartialOrd + Default + Copy + ToString,
    {
        NumberRules {
            validator: self,
            field,
            value,
        }
    }

    /// Adds an error for `field` when `condition` is false.
    pub fn must(&mut self, field: &'static str, condition: bool, key: MessageKey) -> &mut Self {
        if !condition {
            self.push(field, self.localizer.get(key));
        }
        self
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.push(format!("{}: {}", field, message));
    }

    pub fn finish(self) -> ValidationResult {
        ValidationResult {
            errors: self.errors,
        }
    }
}

pub struct TextRules<'v, 'a> {
    validator: &'v mut Validator<'a>,
    field: &'static str,
    value: &'v str,
}

impl TextRules<'_, '_> {
    /// Fails for empty or whitespace-only values.
    pub fn not_empty(self) -> Self {
        if self.value.trim().is_empty() {
            let message = self.validator.localizer.get(MessageKey::Empty);
            self.validator.push(self.field, message);
        }
        self
    }

    /// Fails when the value has more than `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        if self.value.chars().count() > max {
            let message = self
                .validator
                .localizer
                .format(MessageKey::MaxLength, &[("max", &max.to_string())]);
            self.validator.push(self.field, message);
        }
        self
    }

    pub fn email(self) -> Self {
        if !self.value.trim().is_empty() && !is_email(self.value) {
            let message = self.validator.localizer.get(MessageKey::InvalidEmail);
            self.validator.push(self.field, message);
        }
        self
    }

    pub fn equals(self, other: &str, key: MessageKey) -> Self {
        if self.value != other {
            let message = self.validator.localizer.get(key);
            self.validator.push(self.field, message);
        }
        self
    }
}

pub struct OptionalTextRules<'v, 'a> {
    validator: &'v mut Validator<'a>,
    field: &'static str,
    value: Option<&'v str>,
}

impl OptionalTextRules<'_, '_> {
    /// Fails when the value is absent.
    pub fn required(self) -> Self {
        if self.value.is_none() {
            let message = self.validator.localizer.get(MessageKey::Required);
            self.validator.push(self.field, message);
        }
        self
    }

    pub fn max_length(self, max: usize) -> Self {
        if let Some(value) = self.value {
            if value.chars().count() > max {
                let message = self
                    .validator
                    .localizer
                    .format(MessageKey::MaxLength, &[("max", &max.to_string())]);
                self.validator.push(self.field, message);
            }
        }
        self
    }
}

pub struct NumberRules<'v, 'a, N> {
    validator: &'v mut Validator<'a>,
    field: &'static str,
    value: N,
}

impl<N> NumberRules<'_, '_, N>
where
    N: PartialOrd + Default + Copy + ToString,
{
    /// Fails unless the value is greater than zero.
    pub fn positive(self) -> Self {
        if self.value <= N::default() {
            let message = self.validator.localizer.get(MessageKey::MustBePositive);
            self.validator.push(self.field, message);
        }
        self
    }

    /// Fails unless `min <= value <= max`.
    pub fn between(self, min: N, max: N) -> Self {
        if self.value < min || self.value > max {
            let message = self.validator.localizer.format(
                MessageKey::OutOfRange,
                &[("min", &min.to_string()), ("max", &max.to_string())],
            );
            self.validator.push(self.field, message);
        }
        self
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
