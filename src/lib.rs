#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use cli::Repl;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{ReplConfig, TomlConfig};

pub use core::{pretty::PrettyNumbers, tier::MagnitudeTier};
pub use domain::{input::PrettyInput, order::Order};
pub use utils::error::{PrettyError, Result};
