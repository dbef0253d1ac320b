//! Shared domain newtypes for Parcoursup data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Parcoursup admission session, identified by the bac year (e.g. 2023).
///
/// Both source datasets carry the year as a bare string; keeping it as a
/// validated newtype avoids mixing it up with the dozens of other numeric
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(pub u16);

impl Session {
    /// Parse from the string form used by the datasets ("2023").
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<u16>().ok().map(Session)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// UAI institution code ("Unité Administrative Immatriculée"), e.g. "0751234X".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uai(pub String);

impl Uai {
    pub fn new(code: impl Into<String>) -> Self {
        Uai(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_parses_year_strings() {
        assert_eq!(Session::parse("2023"), Some(Session(2023)));
        assert_eq!(Session::parse(" 2021 "), Some(Session(2021)));
        assert_eq!(Session::parse("abc"), None);
        assert_eq!(Session::parse(""), None);
    }

    #[test]
    fn session_serializes_transparently() {
        let json = serde_json::to_string(&Session(2023)).unwrap();
        assert_eq!(json, "2023");
    }

    #[test]
    fn uai_display_round_trips() {
        let uai = Uai::new("0751234X");
        assert_eq!(uai.to_string(), "0751234X");
        assert_eq!(uai.as_str(), "0751234X");
    }
}
