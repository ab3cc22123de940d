mod compute;
mod spec;

use serde::Deserialize;
use thiserror::Error;

pub use compute::{compute, compute_with};
pub use spec::{BrightnessSpec, Sign};

/// Highest brightness accepted before the legacy clamp kicks in.
pub const LEGACY_UPPER_BOUND: i64 = 255;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid brightness '{0}', expected [-+]INT[%]")]
    InvalidFormat(String),

    #[error("could not compute new keyboard brightness (current: {current}, maximum: {max})")]
    Compute { current: i32, max: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// How the computed value is capped at the top end.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClampMode {
    /// Values above 255 are replaced with the device maximum.
    /// Values between the maximum and 255 pass through unchanged.
    #[default]
    Legacy,
    /// Values above the device maximum are replaced with the maximum.
    Device,
}
