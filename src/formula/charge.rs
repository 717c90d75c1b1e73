//! Charge notation resolver.
//!
//! Interprets the suffix left over once all element terms are consumed.
//! Three notations are accepted:
//!
//! | Suffix   | Charge | Canonical text |
//! |----------|--------|----------------|
//! | `+`      | +1     | `+`            |
//! | `---`    | −3     | `-3`           |
//! | `+2`     | +2     | `+2`           |
//! | `-1`     | −1     | `-`            |
//! | `+0`     | 0      | (none)         |
//!
//! A sign followed by digits is read as a literal signed integer and takes
//! priority over counting repeated signs. Anything else is rejected.

use super::error::ParseError;

/// A resolved charge suffix.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Charge {
    pub value: f64,
    pub text: String,
}

impl Charge {
    pub fn neutral() -> Self {
        Self {
            value: 0.0,
            text: String::new(),
        }
    }
}

/// Resolves `suffix`, which starts at byte `position` of the formula text.
///
/// `suffix` must extend to the end of the formula.
pub(super) fn resolve(suffix: &str, position: usize) -> Result<Charge, ParseError> {
    let sign = match suffix.chars().next() {
        None => return Ok(Charge::neutral()),
        Some(c @ ('+' | '-')) => c,
        Some(_) => return Err(ParseError::invalid_charge(suffix, position)),
    };

    let run = suffix.chars().take_while(|&c| c == sign).count();
    // Signs are ASCII, so the run length doubles as a byte offset.
    let digits = &suffix[run..];

    let magnitude = if digits.is_empty() {
        run as u32
    } else if run == 1 && digits.chars().all(|c| c.is_ascii_digit()) {
        digits
            .parse::<u32>()
            .map_err(|_| ParseError::invalid_charge(suffix, position))?
    } else {
        return Err(ParseError::invalid_charge(suffix, position));
    };

    if magnitude == 0 {
        return Ok(Charge::neutral());
    }

    let value = match sign {
        '+' => f64::from(magnitude),
        _ => -f64::from(magnitude),
    };

    Ok(Charge {
        value,
        text: render(sign, magnitude),
    })
}

/// Canonical suffix for a non-zero charge: a bare sign for ±1, otherwise the
/// sign followed by the magnitude.
fn render(sign: char, magnitude: u32) -> String {
    match magnitude {
        1 => sign.to_string(),
        n => format!("{sign}{n}"),
    }
}
