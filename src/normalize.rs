//! Normalizer expression parser using chumsky.
//!
//! A normalizer rewrites a raw INFO value before it is compared. It is
//! written as a chain of steps joined by `.`:
//! - `split("|", 1)` - keep the second `|`-separated segment
//! - `split(":").trim` - keep the first `:` segment, then trim whitespace
//! - `replace("_", " ").lower()`
//! - `strip_prefix("chr")`
//!
//! The empty expression leaves values unchanged.

use chumsky::prelude::*;

use crate::error::{Result, VcfToolsError};

/// One rewriting step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Trim,
    Lower,
    Upper,
    /// Keep segment `index` after splitting on `sep`.
    Split { sep: String, index: usize },
    Replace { from: String, to: String },
    StripPrefix(String),
    StripSuffix(String),
}

impl Step {
    fn apply(&self, value: String) -> String {
        match self {
            Step::Trim => value.trim().to_string(),
            Step::Lower => value.to_lowercase(),
            Step::Upper => value.to_uppercase(),
            Step::Split { sep, index } => value
                .split(sep.as_str())
                .nth(*index)
                .unwrap_or_default()
                .to_string(),
            Step::Replace { from, to } => value.replace(from.as_str(), to),
            Step::StripPrefix(prefix) => match value.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.to_string(),
                None => value,
            },
            Step::StripSuffix(suffix) => match value.strip_suffix(suffix.as_str()) {
                Some(rest) => rest.to_string(),
                None => value,
            },
        }
    }
}

/// A compiled chain of steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalizer {
    steps: Vec<Step>,
}

impl Normalizer {
    /// Parse a normalizer expression.
    pub fn parse(expr: &str) -> Result<Self> {
        let steps = parser().parse(expr).map_err(|errs| {
            VcfToolsError::NormalizerParseError(
                errs.into_iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        })?;
        Ok(Self { steps })
    }

    /// Run every step in order over `raw`.
    pub fn apply(&self, raw: &str) -> String {
        self.steps
            .iter()
            .fold(raw.to_string(), |value, step| step.apply(value))
    }
}

/// Create the normalizer expression parser.
pub fn parser() -> impl Parser<char, Vec<Step>, Error = Simple<char>> {
    // String literal (double-quoted)
    let string = just('"')
        .ignore_then(filter(|c: &char| *c != '"').repeated())
        .then_ignore(just('"'))
        .collect::<String>()
        .padded();

    let index = text::int(10)
        .try_map(|s: String, span| {
            s.parse::<usize>()
                .map_err(|e| Simple::custom(span, e.to_string()))
        })
        .padded();

    let open = just('(').padded();
    let close = just(')').padded();
    let comma = just(',').padded();

    // Steps without arguments accept an optional `()`
    let nullary = |name: &'static str, step: Step| {
        text::keyword(name)
            .padded()
            .then_ignore(open.clone().then(close.clone()).or_not())
            .to(step)
    };

    let split = text::keyword("split")
        .padded()
        .ignore_then(open.clone())
        .ignore_then(string.clone())
        .then(comma.clone().ignore_then(index).or_not())
        .then_ignore(close.clone())
        .map(|(sep, index)| Step::Split {
            sep,
            index: index.unwrap_or(0),
        });

    let replace = text::keyword("replace")
        .padded()
        .ignore_then(open.clone())
        .ignore_then(string.clone())
        .then_ignore(comma)
        .then(string.clone())
        .then_ignore(close.clone())
        .map(|(from, to)| Step::Replace { from, to });

    let unary_string = |name: &'static str| {
        text::keyword(name)
            .padded()
            .ignore_then(open.clone())
            .ignore_then(string.clone())
            .then_ignore(close.clone())
    };

    let step = choice((
        nullary("trim", Step::Trim),
        nullary("lower", Step::Lower),
        nullary("upper", Step::Upper),
        split,
        replace,
        unary_string("strip_prefix").map(Step::StripPrefix),
        unary_string("strip_suffix").map(Step::StripSuffix),
    ));

    step.separated_by(just('.').padded())
        .padded()
        .then_ignore(end())
}
