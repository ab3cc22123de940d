use crate::response::Response;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Define the new keyboard brightness.
    ///
    /// A plain number sets the brightness,
    /// a leading `+` or `-` changes it relative to the current level,
    /// and a trailing `%` makes the number a percentage of the maximum.
    #[arg(short, long, value_name = "[-+]INT[%]", allow_hyphen_values = true)]
    pub brightness: Option<String>,

    /// Show current keyboard brightness.
    #[arg(short, long)]
    pub current: bool,

    /// Show maximum keyboard brightness.
    #[arg(short, long)]
    pub maximum: bool,

    /// Format to output the response as.
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Print debug information to stderr.
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Deserialize, Default, ValueEnum, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Plain,
    Json,
}

pub fn handle_response(response: &Response, format: Format) {
    match format {
        Format::Plain => {
            for line in response.lines() {
                println!("{line}");
            }
        }
        Format::Json => println!(
            "{}",
            serde_json::to_string(response).expect("to be valid json")
        ),
    }
}
