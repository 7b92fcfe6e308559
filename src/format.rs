//! Float formatting per a printf-style specification.

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// How the numeric part is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatKind {
    /// Fixed-point, `f`.
    Fixed,
    /// Scientific notation, `e` (rendered with Rust's exponent syntax).
    Scientific,
}

/// A parsed float format specification.
///
/// Accepts the `[0][width].[precision](f|e)` subset of printf specs:
/// `0.3f`, `.1f`, `8.2f`, `05.1f`, `0.2e`. Omitted precision renders with
/// the printf default of six digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat {
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
    kind: FormatKind,
}

impl FloatFormat {
    /// Render a value according to this specification.
    pub fn render(&self, value: f64) -> String {
        let precision = self.precision.unwrap_or(6);
        match (self.kind, self.zero_pad) {
            (FormatKind::Fixed, true) => {
                format!("{value:0width$.precision$}", width = self.width)
            }
            (FormatKind::Fixed, false) => {
                format!("{value:width$.precision$}", width = self.width)
            }
            (FormatKind::Scientific, true) => {
                format!("{value:0width$.precision$e}", width = self.width)
            }
            (FormatKind::Scientific, false) => {
                format!("{value:width$.precision$e}", width = self.width)
            }
        }
    }
}

/// The format the plugin ships with: `0.3f`.
impl Default for FloatFormat {
    fn default() -> Self {
        Self {
            zero_pad: false,
            width: 0,
            precision: Some(3),
            kind: FormatKind::Fixed,
        }
    }
}

impl FromStr for FloatFormat {
    type Err = CalcError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let err = || CalcError::invalid_format(spec);
        let kind = match spec.chars().last() {
            Some('f') => FormatKind::Fixed,
            Some('e') => FormatKind::Scientific,
            _ => return Err(err()),
        };
        let body = &spec[..spec.len() - 1];
        let (width_part, precision) = match body.split_once('.') {
            Some((width_part, precision)) => {
                (width_part, Some(precision.parse::<usize>().map_err(|_| err())?))
            }
            None => (body, None),
        };
        let (zero_pad, width) = if width_part.is_empty() {
            (false, 0)
        } else {
            (
                width_part.starts_with('0'),
                width_part.parse::<usize>().map_err(|_| err())?,
            )
        };
        Ok(Self {
            zero_pad,
            width,
            precision,
            kind,
        })
    }
}

impl fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.zero_pad && self.width == 0 {
            write!(f, "0")?;
        } else if self.zero_pad {
            write!(f, "0{}", self.width)?;
        } else if self.width > 0 {
            write!(f, "{}", self.width)?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{precision}")?;
        }
        match self.kind {
            FormatKind::Fixed => write!(f, "f"),
            FormatKind::Scientific => write!(f, "e"),
        }
    }
}
