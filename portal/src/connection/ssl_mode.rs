use std::fmt;

/// Modes offered by the SSL selector. The connection field itself is kept as
/// a free string, a hand-typed connection string may carry any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    #[default]
    Require,
    Disable,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub const ALL: [SslMode; 4] = [
        SslMode::Require,
        SslMode::Disable,
        SslMode::VerifyCa,
        SslMode::VerifyFull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Require => "require",
            SslMode::Disable => "disable",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SslMode::Require => "Require",
            SslMode::Disable => "Disable",
            SslMode::VerifyCa => "Verify CA",
            SslMode::VerifyFull => "Verify Full",
        }
    }

    /// (label, value) pairs in selector order
    pub fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL
            .iter()
            .map(|mode| (mode.label(), mode.as_str()))
            .collect()
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_order_and_default() {
        assert_eq!(SslMode::default().as_str(), "require");
        let values: Vec<&str> =
            SslMode::options().into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, ["require", "disable", "verify-ca", "verify-full"]);
    }
}
