use crate::NAME;
use color_eyre::Result;
use color_eyre::config::{HookBuilder, Theme};
use dirs::data_dir;
use std::env;
use std::path::Path;
use strip_ansi_escapes::Writer;
use tracing::warn;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::{Layer, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

struct MakeFileWriter {
    file_writer: NonBlocking,
}

impl MakeFileWriter {
    const fn new(file_writer: NonBlocking) -> Self {
        Self { file_writer }
    }
}

impl<'a> MakeWriter<'a> for MakeFileWriter {
    type Writer = Writer<NonBlocking>;

    fn make_writer(&'a self) -> Self::Writer {
        Writer::new(self.file_writer.clone())
    }
}

/// Installs the error report hook and the tracing subscriber.
///
/// The returned guard must be held until exit
/// so that buffered file logs are flushed.
/// There is no guard if the log file could not be opened.
pub fn install_logging(debug: bool) -> Option<WorkerGuard> {
    if let Err(err) = install_error_hook() {
        eprintln!("Failed to install color-eyre: {err:?}");
    }

    match install_tracing(debug) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to install tracing: {err:?}");
            None
        }
    }
}

/// Installs the `color-eyre` report and panic hooks.
///
/// Reports are printed through tracing, which escapes control characters,
/// so they are rendered without colours or source locations.
pub fn install_error_hook() -> Result<()> {
    HookBuilder::default()
        .theme(Theme::new())
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    Ok(())
}

fn install_tracing(debug: bool) -> Result<Option<WorkerGuard>> {
    // stdout is reserved for command output
    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let filter_layer = if debug {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?
    };
    let file_filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    let log_path = data_dir().unwrap_or(env::current_dir()?).join(NAME);

    let file_log = file_appender(&log_path).map(|appender| {
        let (file_writer, guard) = tracing_appender::non_blocking(appender);
        let layer = Layer::default()
            .with_writer(MakeFileWriter::new(file_writer))
            .with_ansi(false)
            .with_filter(file_filter_layer);

        (layer, guard)
    });

    let (file_layer, guard, file_err) = match file_log {
        Ok((layer, guard)) => (Some(layer), Some(guard), None),
        Err(err) => (None, None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .with(file_layer)
        .try_init()?;

    if let Some(err) = file_err {
        warn!("Failed to open log file in '{}': {err}", log_path.display());
        warn!("Logging to stderr only");
    }

    Ok(guard)
}

/// Opens `error.log` inside `dir`, creating the directory if needed.
fn file_appender(dir: &Path) -> std::result::Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("error.log")
        .build(dir)
}
