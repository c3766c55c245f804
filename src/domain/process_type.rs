/// Post-processing applied to extracted or submitted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProcessType {
    #[default]
    Summary,
    Explanation,
    Analysis,
    /// Unrecognized type; text is returned unchanged.
    Other(String),
}

impl ProcessType {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("summary") => Self::Summary,
            Some("explanation") => Self::Explanation,
            Some("analysis") => Self::Analysis,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Summary => "summary",
            Self::Explanation => "explanation",
            Self::Analysis => "analysis",
            Self::Other(raw) => raw,
        }
    }
}

