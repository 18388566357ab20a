//! Comparison modes shared by the rank score and INFO filters.

use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

use crate::error::{Result, VcfToolsError};

/// How a record value is compared against the user threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Comparison {
    Equal,
    Greater,
    Less,
    LessOrEqual,
    GreaterOrEqual,
}

impl Comparison {
    /// The relational operator this mode stands for.
    pub fn predicate(self) -> fn(&f64, &f64) -> bool {
        match self {
            Comparison::Equal => f64::eq,
            Comparison::Greater => f64::gt,
            Comparison::Less => f64::lt,
            Comparison::LessOrEqual => f64::le,
            Comparison::GreaterOrEqual => f64::ge,
        }
    }

    /// Whether `value` satisfies this mode against `threshold`.
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        (self.predicate())(&value, &threshold)
    }

    /// Parse a mode name, failing on anything outside the five modes.
    pub fn parse(mode: &str) -> Result<Self> {
        Comparison::from_str(mode).map_err(|_| VcfToolsError::InvalidComparison(mode.to_string()))
    }
}

/// Whether a value passes an optional comparison; no mode accepts everything.
pub fn passes(mode: Option<Comparison>, value: f64, threshold: f64) -> bool {
    mode.is_none_or(|mode| mode.holds(value, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!(Comparison::parse("equal").unwrap(), Comparison::Equal);
        assert_eq!(Comparison::parse("greater").unwrap(), Comparison::Greater);
        assert_eq!(Comparison::parse("less").unwrap(), Comparison::Less);
        assert_eq!(
            Comparison::parse("lessorequal").unwrap(),
            Comparison::LessOrEqual
        );
        assert_eq!(
            Comparison::parse("greaterorequal").unwrap(),
            Comparison::GreaterOrEqual
        );
    }

    #[test]
    fn test_parse_invalid_mode() {
        let err = Comparison::parse("greater_than").unwrap_err();
        assert!(matches!(err, VcfToolsError::InvalidComparison(ref m) if m == "greater_than"));
        assert!(Comparison::parse("Equal").is_err());
    }

    #[test]
    fn test_mode_names_round_trip() {
        assert_eq!(Comparison::GreaterOrEqual.to_string(), "greaterorequal");
        assert_eq!(Comparison::LessOrEqual.as_ref(), "lessorequal");
    }

    #[test]
    fn test_relational_operators() {
        assert!(Comparison::Equal.holds(2.0, 2.0));
        assert!(!Comparison::Equal.holds(2.5, 2.0));
        assert!(Comparison::Greater.holds(3.0, 2.0));
        assert!(!Comparison::Greater.holds(2.0, 2.0));
        assert!(Comparison::Less.holds(1.0, 2.0));
        assert!(!Comparison::Less.holds(2.0, 2.0));
        assert!(Comparison::LessOrEqual.holds(2.0, 2.0));
        assert!(!Comparison::LessOrEqual.holds(2.1, 2.0));
        assert!(Comparison::GreaterOrEqual.holds(2.0, 2.0));
        assert!(!Comparison::GreaterOrEqual.holds(1.9, 2.0));
    }

    #[test]
    fn test_no_mode_passes_everything() {
        assert!(passes(None, f64::NAN, 0.0));
        assert!(passes(Some(Comparison::Less), -1.0, 0.0));
        assert!(!passes(Some(Comparison::Less), 1.0, 0.0));
    }
}
