use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PayrollError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilingStatus {
    Single,
    Married,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 2] = [FilingStatus::Single, FilingStatus::Married];

    /// Canonical lowercase form, as accepted by [`FilingStatus::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
        }
    }

    /// Capitalised label used in report subtotal lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married",
        }
    }

    /// Parses a status, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim();
        if normalized.eq_ignore_ascii_case("single") {
            Some(Self::Single)
        } else if normalized.eq_ignore_ascii_case("married") {
            Some(Self::Married)
        } else {
            None
        }
    }
}

impl FromStr for FilingStatus {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PayrollError::UnsupportedFilingStatus(s.trim().to_string()))
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_canonical_forms() {
        assert_eq!(FilingStatus::parse("single"), Some(FilingStatus::Single));
        assert_eq!(FilingStatus::parse("married"), Some(FilingStatus::Married));
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(FilingStatus::parse("  SINGLE "), Some(FilingStatus::Single));
        assert_eq!(FilingStatus::parse("Married"), Some(FilingStatus::Married));
    }

    #[test]
    fn from_str_rejects_unknown_status() {
        let result = "head of household".parse::<FilingStatus>();

        assert_eq!(
            result,
            Err(PayrollError::UnsupportedFilingStatus(
                "head of household".to_string()
            ))
        );
    }

    #[test]
    fn from_str_rejects_empty_status() {
        let result = "".parse::<FilingStatus>();

        assert_eq!(
            result,
            Err(PayrollError::UnsupportedFilingStatus(String::new()))
        );
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for status in FilingStatus::ALL {
            assert_eq!(FilingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(FilingStatus::Married.to_string(), "Married");
    }
}
