use crate::utils::error::{PrettyError, Result};
use regex::Regex;
use std::sync::LazyLock;

const EXPECTED_NUMBER: &str = "expected a number or valid numeric string";

/// Whole-string pattern for a signed decimal numeral. Prefix matches are not enough.
static NUMERIC_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("numeric string pattern should compile")
});

/// A value handed to the formatter: either a number or its textual form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrettyInput<'a> {
    Number(f64),
    Integer(i64),
    Text(&'a str),
}

impl PrettyInput<'_> {
    /// Validates the input and truncates it toward zero.
    pub fn to_whole(&self) -> Result<i128> {
        match *self {
            PrettyInput::Integer(n) => Ok(i128::from(n)),
            PrettyInput::Number(n) => {
                if !n.is_finite() {
                    return Err(PrettyError::invalid_argument(EXPECTED_NUMBER));
                }
                whole_from_f64(n)
            }
            PrettyInput::Text(text) => {
                if !NUMERIC_STRING.is_match(text) {
                    return Err(PrettyError::invalid_argument(EXPECTED_NUMBER));
                }
                let integer_part = text.split('.').next().unwrap_or(text);
                integer_part
                    .parse::<i128>()
                    .map_err(|_| PrettyError::invalid_argument("value exceeds supported precision"))
            }
        }
    }
}

/// Truncates a finite float to an integer, rejecting values 128 bits cannot hold.
pub(crate) fn whole_from_f64(n: f64) -> Result<i128> {
    let truncated = n.trunc();
    // 2^127 is exactly representable, so this bound is exact.
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
    if truncated >= LIMIT || truncated < -LIMIT {
        return Err(PrettyError::invalid_argument(
            "value exceeds supported precision",
        ));
    }
    Ok(truncated as i128)
}

impl From<f64> for PrettyInput<'_> {
    fn from(n: f64) -> Self {
        PrettyInput::Number(n)
    }
}

impl From<f32> for PrettyInput<'_> {
    fn from(n: f32) -> Self {
        PrettyInput::Number(f64::from(n))
    }
}

impl From<i64> for PrettyInput<'_> {
    fn from(n: i64) -> Self {
        PrettyInput::Integer(n)
    }
}

impl From<i32> for PrettyInput<'_> {
    fn from(n: i32) -> Self {
        PrettyInput::Integer(i64::from(n))
    }
}

impl From<u32> for PrettyInput<'_> {
    fn from(n: u32) -> Self {
        PrettyInput::Integer(i64::from(n))
    }
}

impl<'a> From<&'a str> for PrettyInput<'a> {
    fn from(text: &'a str) -> Self {
        PrettyInput::Text(text)
    }
}

impl<'a> From<&'a String> for PrettyInput<'a> {
    fn from(text: &'a String) -> Self {
        PrettyInput::Text(text.as_str())
    }
}
