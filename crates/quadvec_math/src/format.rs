//! Per-component numeric format tokens
//!
//! A token is a letter optionally followed by a precision, applied to every
//! component of a vector:
//!
//! | Token      | Reals | Integers | Output                               |
//! |------------|-------|----------|--------------------------------------|
//! | `""`, `G`  | yes   | yes      | shortest round-trip form             |
//! | `F<n>`     | yes   | yes      | fixed point, `n` decimals (default 2)|
//! | `E<n>`     | yes   | yes      | scientific, `n` decimals (default 6), exponent as `E+000` |
//! | `D<n>`     | no    | yes      | zero padded to `n` digits            |
//! | `X<n>`     | no    | yes      | hexadecimal, padded to `n` digits    |
//!
//! The precision may not exceed [`MAX_PRECISION`].
//!
//! Output never depends on the host locale: `.` is always the decimal point
//! and no group separators are emitted.

use std::str::FromStr;

use crate::{Real, VectorError};

/// Largest precision or digit count a token may carry
pub const MAX_PRECISION: usize = u16::MAX as usize;

/// Parsed component format token
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComponentFormat {
    /// Shortest representation that round-trips
    #[default]
    General,
    /// Fixed number of decimals
    Fixed { precision: usize },
    /// Scientific notation
    Exponent { precision: usize, upper: bool },
    /// Integer digits, zero padded
    Decimal { digits: usize },
    /// Integer as two's complement hexadecimal
    Hex { digits: usize, upper: bool },
}

impl FromStr for ComponentFormat {
    type Err = VectorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| VectorError::InvalidFormat {
            format: token.to_string(),
            reason,
        };

        let mut chars = token.chars();
        let Some(letter) = chars.next() else {
            return Ok(ComponentFormat::General);
        };
        let rest = chars.as_str();
        let precision = if rest.is_empty() {
            None
        } else {
            Some(rest.parse::<usize>().map_err(|_| invalid("precision is not a number"))?)
        };
        if precision.is_some_and(|p| p > MAX_PRECISION) {
            return Err(invalid("precision is too large"));
        }

        match letter {
            'G' | 'g' if precision.is_none() => Ok(ComponentFormat::General),
            'G' | 'g' => Err(invalid("general format takes no precision")),
            'F' | 'f' => Ok(ComponentFormat::Fixed {
                precision: precision.unwrap_or(2),
            }),
            'E' | 'e' => Ok(ComponentFormat::Exponent {
                precision: precision.unwrap_or(6),
                upper: letter == 'E',
            }),
            'D' | 'd' => Ok(ComponentFormat::Decimal {
                digits: precision.unwrap_or(1),
            }),
            'X' | 'x' => Ok(ComponentFormat::Hex {
                digits: precision.unwrap_or(1),
                upper: letter == 'X',
            }),
            _ => Err(invalid("unknown format specifier")),
        }
    }
}

impl ComponentFormat {
    /// Render a real component
    pub fn format_real(self, value: Real) -> Result<String, VectorError> {
        match self {
            ComponentFormat::General => Ok(format!("{}", value)),
            ComponentFormat::Fixed { precision } => Ok(format!("{:.*}", precision, value)),
            ComponentFormat::Exponent { precision, upper } => {
                Ok(format_exponent(f64::from(value), precision, upper))
            }
            ComponentFormat::Decimal { .. } | ComponentFormat::Hex { .. } => {
                Err(VectorError::InvalidFormat {
                    format: self.token(),
                    reason: "integer-only format applied to a real component",
                })
            }
        }
    }

    /// Render an integer component
    pub fn format_int(self, value: i32) -> Result<String, VectorError> {
        let s = match self {
            ComponentFormat::General => format!("{}", value),
            ComponentFormat::Fixed { precision } => format!("{:.*}", precision, f64::from(value)),
            ComponentFormat::Exponent { precision, upper } => {
                format_exponent(f64::from(value), precision, upper)
            }
            ComponentFormat::Decimal { digits } => {
                let sign = if value < 0 { "-" } else { "" };
                format!("{}{:0>2$}", sign, value.unsigned_abs(), digits)
            }
            ComponentFormat::Hex { digits, upper: false } => format!("{:0>1$x}", value, digits),
            ComponentFormat::Hex { digits, upper: true } => format!("{:0>1$X}", value, digits),
        };
        Ok(s)
    }

    /// Canonical token text, used in error messages
    pub fn token(self) -> String {
        match self {
            ComponentFormat::General => "G".to_string(),
            ComponentFormat::Fixed { precision } => format!("F{}", precision),
            ComponentFormat::Exponent { precision, upper } => {
                format!("{}{}", if upper { 'E' } else { 'e' }, precision)
            }
            ComponentFormat::Decimal { digits } => format!("D{}", digits),
            ComponentFormat::Hex { digits, upper } => {
                format!("{}{}", if upper { 'X' } else { 'x' }, digits)
            }
        }
    }
}

/// Scientific notation with a signed, at least three digit exponent
fn format_exponent(value: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{:.*e}", precision, value);
    // inf and NaN carry no exponent
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    let letter = if upper { 'E' } else { 'e' };
    format!("{}{}{}{:0>3}", mantissa, letter, sign, digits)
}

/// Join already-formatted components as `(a, b, ...)`
pub(crate) fn join_components<I>(parts: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let parts: Vec<String> = parts.into_iter().collect();
    format!("({})", parts.join(", "))
}

/// Format every real component with `token`
pub(crate) fn format_reals(token: &str, values: &[Real]) -> Result<String, VectorError> {
    let format: ComponentFormat = token.parse()?;
    let parts = values
        .iter()
        .map(|&v| format.format_real(v))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(join_components(parts))
}

/// Format every integer component with `token`
pub(crate) fn format_ints(token: &str, values: &[i32]) -> Result<String, VectorError> {
    let format: ComponentFormat = token.parse()?;
    let parts = values
        .iter()
        .map(|&v| format.format_int(v))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(join_components(parts))
}
