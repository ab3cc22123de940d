mod dbus_keyboard;

use super::Backlight;
use dbus_keyboard::KbdBacklightProxy;
use tracing::{debug, trace};

/// Keyboard backlight exposed by UPower on the system bus.
#[derive(Debug)]
pub struct Client {
    keyboard: KbdBacklightProxy<'static>,
}

impl Client {
    pub async fn new() -> zbus::Result<Self> {
        let dbus = Box::pin(zbus::Connection::system()).await?;
        debug!("Connected to system bus");

        let keyboard = KbdBacklightProxy::new(&dbus).await?;

        Ok(Self { keyboard })
    }
}

impl Backlight for Client {
    async fn brightness(&self) -> zbus::Result<i32> {
        let value = self.keyboard.get_brightness().await?;
        trace!("GetBrightness -> {value}");
        Ok(value)
    }

    async fn max_brightness(&self) -> zbus::Result<i32> {
        let value = self.keyboard.get_max_brightness().await?;
        trace!("GetMaxBrightness -> {value}");
        Ok(value)
    }

    async fn set_brightness(&self, value: i32) -> zbus::Result<()> {
        trace!("SetBrightness <- {value}");
        self.keyboard.set_brightness(value).await
    }
}
