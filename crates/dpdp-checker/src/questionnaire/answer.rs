use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Respondent choice for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    Partial,
    No,
}

impl Answer {
    /// Choices in descending weight, the order they are offered to respondents.
    pub const fn ordered() -> [Self; 3] {
        [Self::Yes, Self::Partial, Self::No]
    }

    pub const fn weight(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::Partial => 0.5,
            Self::No => 0.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Partial => "Partial",
            Self::No => "No",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised answer '{0}' (expected yes, partial, or no)")]
pub struct ParseAnswerError(pub String);

impl FromStr for Answer {
    type Err = ParseAnswerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "1" => Ok(Self::Yes),
            "partial" | "p" | "0.5" => Ok(Self::Partial),
            "no" | "n" | "0" => Ok(Self::No),
            _ => Err(ParseAnswerError(raw.to_string())),
        }
    }
}
