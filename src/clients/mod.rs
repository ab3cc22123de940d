pub mod kbd_backlight;

/// A device whose brightness can be read and written.
///
/// Both reads are expected to reflect the device at the time of the call.
/// Nothing is cached.
#[allow(async_fn_in_trait)]
pub trait Backlight {
    /// Gets the current brightness level.
    async fn brightness(&self) -> zbus::Result<i32>;

    /// Gets the highest brightness level the device supports.
    async fn max_brightness(&self) -> zbus::Result<i32>;

    /// Sets the brightness level.
    async fn set_brightness(&self, value: i32) -> zbus::Result<()>;
}
