use std::collections::HashMap;

use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "Field cannot be empty";
pub const PATTERN_MISMATCH_MESSAGE: &str =
    "Field information doesn't match pattern";

/// Field key -> first violated rule. A key that is absent is valid.
pub type ValidationErrors = HashMap<String, String>;

#[derive(Debug, Clone)]
pub struct ValidationField {
    pub key: String,
    pub required: bool,
    pub pattern: Option<Regex>,
    pub custom_pattern_message: Option<String>,
    pub value: String,
}

impl ValidationField {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            required: false,
            pattern: None,
            custom_pattern_message: None,
            value: value.into(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn pattern_message<S: Into<String>>(mut self, message: S) -> Self {
        self.custom_pattern_message = Some(message.into());
        self
    }

    fn check(&self) -> Option<String> {
        if self.required && self.value.is_empty() {
            return Some(REQUIRED_MESSAGE.to_string());
        }
        match &self.pattern {
            Some(pattern)
                if !self.value.is_empty() && !pattern.is_match(&self.value) =>
            {
                Some(
                    self.custom_pattern_message
                        .clone()
                        .unwrap_or_else(|| {
                            PATTERN_MISMATCH_MESSAGE.to_string()
                        }),
                )
            }
            _ => None,
        }
    }
}

/// Check every field independently and collect the failures.
pub fn common_form_validation(fields: &[ValidationField]) -> ValidationErrors {
    fields
        .iter()
        .filter_map(|field| field.check().map(|msg| (field.key.clone(), msg)))
        .collect()
}
