use super::{Error, Result};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How a spec's magnitude is applied to the current brightness.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    #[default]
    Absolute,
    Increment,
    Decrement,
}

impl Sign {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Absolute => "",
            Self::Increment => "+",
            Self::Decrement => "-",
        }
    }
}

/// A parsed `--brightness` argument.
///
/// The grammar is `[-+]INT[%]`:
///
/// - `50` sets the brightness to 50.
/// - `+10` raises it by 10, `-10` lowers it by 10.
/// - `30%` sets it to 30% of the device maximum.
/// - `+5%` and `-5%` step it by 5% of the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessSpec {
    pub magnitude: u64,
    pub sign: Sign,
    pub is_percentage: bool,
}

impl BrightnessSpec {
    pub const fn new(sign: Sign, magnitude: u64, is_percentage: bool) -> Self {
        Self {
            magnitude,
            sign,
            is_percentage,
        }
    }
}

impl FromStr for BrightnessSpec {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormat(input.to_string());

        let (sign, rest) = if let Some(rest) = input.strip_prefix('+') {
            (Sign::Increment, rest)
        } else if let Some(rest) = input.strip_prefix('-') {
            (Sign::Decrement, rest)
        } else {
            (Sign::Absolute, input)
        };

        // a lone `%` is the first character, so it is never a marker
        let (digits, is_percentage) = match input.len() {
            0 | 1 => (rest, false),
            _ => rest
                .strip_suffix('%')
                .map_or((rest, false), |digits| (digits, true)),
        };

        // `u64::from_str` would also accept a second sign
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let magnitude = digits.parse().map_err(|_| invalid())?;

        Ok(Self::new(sign, magnitude, is_percentage))
    }
}

impl Display for BrightnessSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.sign.prefix(), self.magnitude)?;
        if self.is_percentage {
            write!(f, "%")?;
        }

        Ok(())
    }
}
