use serde::{Deserialize, Serialize};

/// Gender category requested for the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
    Unisex,
}

impl Gender {
    /// Parse a gender selector, case-insensitively and ignoring surrounding
    /// whitespace. Returns `None` for anything other than boy, girl or unisex.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "boy" => Some(Self::Boy),
            "girl" => Some(Self::Girl),
            "unisex" => Some(Self::Unisex),
            _ => None,
        }
    }

    /// The corpus gender this request maps to without any coin flip, if any.
    #[must_use]
    pub fn fixed(self) -> Option<ResolvedGender> {
        match self {
            Self::Boy => Some(ResolvedGender::Boy),
            Self::Girl => Some(ResolvedGender::Girl),
            Self::Unisex => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Boy => write!(f, "boy"),
            Gender::Girl => write!(f, "girl"),
            Gender::Unisex => write!(f, "unisex"),
        }
    }
}

/// Gender key of a corpus partition. Corpora are only ever partitioned by
/// boy and girl; unisex requests are resolved to one of these first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedGender {
    Boy,
    Girl,
}

impl std::fmt::Display for ResolvedGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedGender::Boy => write!(f, "boy"),
            ResolvedGender::Girl => write!(f, "girl"),
        }
    }
}
