use crate::brightness;
use thiserror::Error;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    BusConnect = 1,
    ReadBrightness = 2,
    InvalidBrightness = 3,
    SetBrightness = 4,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to get current brightness")]
    GetBrightness(#[source] zbus::Error),

    #[error("Failed to get maximum brightness")]
    GetMaxBrightness(#[source] zbus::Error),

    #[error(transparent)]
    Brightness(#[from] brightness::Error),

    #[error("Failed to set keyboard brightness")]
    SetBrightness(#[source] zbus::Error),
}

impl Error {
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::GetBrightness(_) | Self::GetMaxBrightness(_) => ExitCode::ReadBrightness,
            Self::Brightness(_) => ExitCode::InvalidBrightness,
            Self::SetBrightness(_) => ExitCode::SetBrightness,
        }
    }
}
