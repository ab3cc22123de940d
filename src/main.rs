use std::process::exit;

use clap::Parser;
use color_eyre::Report;
use color_eyre::eyre::WrapErr;
use genesis::cli::{self, Args};
use genesis::clients::kbd_backlight;
use genesis::config::Config;
use genesis::controller::{self, Request};
use genesis::error::ExitCode;
use genesis::{VERSION, logging};
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let guard = logging::install_logging(args.debug);

    let res = run(&args).await;

    // flush file logs before exiting
    drop(guard);

    if let Err(code) = res {
        exit(code as i32);
    }
}

async fn run(args: &Args) -> Result<(), ExitCode> {
    debug!("Genesis version {}", VERSION);

    let config = Config::load();
    let format = args.format.unwrap_or(config.format);

    let request = Request::try_from(args).map_err(|err| {
        error!("{:?}", Report::new(err));
        ExitCode::InvalidBrightness
    })?;

    let client = kbd_backlight::Client::new()
        .await
        .wrap_err("Failed to connect to system dbus")
        .map_err(|report| {
            error!("{:?}", report);
            ExitCode::BusConnect
        })?;

    let response = controller::run(&client, &request, config.clamp)
        .await
        .map_err(|err| {
            let code = err.exit_code();
            error!("{:?}", Report::new(err));
            code
        })?;

    cli::handle_response(&response, format);

    Ok(())
}
