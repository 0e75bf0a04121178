use std::fmt;

/// Binary size suffixes as understood by kubernetes resource quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KubernetesFactor {
    Ki,
    Mi,
    #[default]
    Gi,
    Ti,
    Pi,
    Ei,
}

impl KubernetesFactor {
    pub const ALL: [KubernetesFactor; 6] = [
        KubernetesFactor::Ki,
        KubernetesFactor::Mi,
        KubernetesFactor::Gi,
        KubernetesFactor::Ti,
        KubernetesFactor::Pi,
        KubernetesFactor::Ei,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KubernetesFactor::Ki => "Ki",
            KubernetesFactor::Mi => "Mi",
            KubernetesFactor::Gi => "Gi",
            KubernetesFactor::Ti => "Ti",
            KubernetesFactor::Pi => "Pi",
            KubernetesFactor::Ei => "Ei",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|factor| factor.as_str() == value)
    }

    /// (label, value) pairs for the unit selector
    pub fn for_dropdown() -> Vec<(&'static str, &'static str)> {
        Self::ALL
            .iter()
            .map(|factor| (factor.as_str(), factor.as_str()))
            .collect()
    }
}

impl fmt::Display for KubernetesFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
