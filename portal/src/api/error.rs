use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Http(u16, String), // status code, response text
    Connection(String),
    Decode(String),
    Rejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // the backend puts a readable message in the body, show it as is
            ApiError::Http(_, body) if !body.is_empty() => write!(f, "{}", body),
            ApiError::Http(code, _) => write!(f, "HTTPError: {}", code),
            ApiError::Connection(s) => write!(f, "ConnectionError: {}", s),
            ApiError::Decode(s) => write!(f, "DecodeError: {}", s),
            ApiError::Rejected(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode(error.to_string())
    }
}

impl From<&str> for ApiError {
    fn from(error: &str) -> Self {
        ApiError::Rejected(error.to_owned())
    }
}

impl From<String> for ApiError {
    fn from(error: String) -> Self {
        ApiError::Rejected(error)
    }
}
