use crate::brightness::{self, BrightnessSpec, ClampMode};
use crate::cli::Args;
use crate::clients::Backlight;
use crate::error::Error;
use crate::response::{Response, percentage};
use tracing::{debug, info};

/// The work requested on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub brightness: Option<BrightnessSpec>,
    pub show_current: bool,
    pub show_max: bool,
}

impl Request {
    /// Whether any output or change was asked for.
    const fn is_empty(&self) -> bool {
        self.brightness.is_none() && !self.show_current && !self.show_max
    }
}

impl TryFrom<&Args> for Request {
    type Error = brightness::Error;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let brightness = args
            .brightness
            .as_deref()
            .map(str::parse::<BrightnessSpec>)
            .transpose()?;

        Ok(Self {
            brightness,
            show_current: args.current,
            show_max: args.maximum,
        })
    }
}

/// Reads the device, then shows and/or sets the brightness.
///
/// Shown values are those read before any write.
/// Nothing is written unless the new value was computed successfully.
pub async fn run<B: Backlight>(
    backlight: &B,
    request: &Request,
    clamp: ClampMode,
) -> Result<Response, Error> {
    let current = backlight.brightness().await.map_err(Error::GetBrightness)?;
    let max = backlight
        .max_brightness()
        .await
        .map_err(Error::GetMaxBrightness)?;

    debug!("Current brightness: {current}, maximum: {max}");

    let mut response = Response::default();

    if request.show_current || request.is_empty() {
        response.current = Some(current);
        response.percentage = percentage(current, max);
    }

    if request.show_max {
        response.max = Some(max);
    }

    if let Some(spec) = request.brightness {
        let value = brightness::compute_with(spec, current, max, clamp)?;

        info!("Setting brightness to {value} ({spec})");
        backlight
            .set_brightness(value)
            .await
            .map_err(Error::SetBrightness)?;

        response.brightness = Some(value);
    }

    Ok(response)
}
