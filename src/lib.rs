#![doc = include_str!("../README.md")]

pub mod brightness;
pub mod cli;
pub mod clients;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod response;

pub const NAME: &str = "genesis";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
