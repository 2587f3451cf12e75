/*
[INPUT]:  CLI arguments and configuration
[OUTPUT]: Public modules for the ces binary
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod command;
pub mod config;

pub use command::{Cli, Command, ExchangeArgs};
pub use config::CliConfig;
