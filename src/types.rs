use std::num::ParseFloatError;

use crate::errors::{Error, Result};

/// Return a 'minimal' representation of the given number
pub fn fstr(x: f32) -> String {
    if x == (x as i32) as f32 {
        // integer route also maps -0.0 to "0"
        return (x as i32).to_string();
    }
    let result = format!("{x:.3}");
    if result.contains('.') {
        let result = result.trim_end_matches('0').trim_end_matches('.');
        if result == "-0" {
            "0".into()
        } else {
            result.into()
        }
    } else {
        result
    }
}

/// Parse a string to an f32
pub fn strp(s: &str) -> Result<f32> {
    s.trim().parse().map_err(|e: ParseFloatError| e.into())
}

/// Parse a numeric attribute value, naming the attribute on failure.
pub fn strp_attr(name: &str, value: &str) -> Result<f32> {
    let v: f32 = strp(value).map_err(|_| Error::InvalidValue(name.into(), value.into()))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(Error::InvalidValue(name.into(), value.into()))
    }
}

/// Parse a leading number, ignoring any trailing unit suffix such as "px" or "mm".
///
/// Returns `None` if there is no leading number.
pub fn strp_unit_prefix(s: &str) -> Option<f32> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|&(idx, c)| !(c.is_ascii_digit() || c == '.' || (idx == 0 && "+-".contains(c))))
        .map_or(s.len(), |(idx, _)| idx);
    s[..end].parse().ok()
}

/// Returns iterator over whitespace-or-comma separated values
pub fn attr_split(input: &str) -> impl Iterator<Item = &str> + '_ {
    input
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|v| !v.is_empty())
}
