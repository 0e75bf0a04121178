use crate::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    SubmitError(String),
    ValidationError(ValidationErrors),
    AlreadySubmitting,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::SubmitError(msg) => write!(f, "Submit error: {}", msg),
            FormError::ValidationError(errors) => {
                let mut fields: Vec<&str> =
                    errors.keys().map(|k| k.as_str()).collect();
                fields.sort_unstable();
                write!(f, "Validation error: {}", fields.join(", "))
            }
            FormError::AlreadySubmitting => {
                write!(f, "Form is already being submitted")
            }
        }
    }
}

impl std::error::Error for FormError {}

impl From<String> for FormError {
    fn from(s: String) -> Self {
        FormError::SubmitError(s)
    }
}
