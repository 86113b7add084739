use crate::config::toml_config::{ReplConfig, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pretty-numbers")]
#[command(about = "Abbreviate large numbers for display (1350000 -> 1.4M)")]
pub struct CliConfig {
    /// Numbers to format. Starts the interactive prompt when omitted.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the interactive prompt
    #[arg(long)]
    pub prompt: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(prompt) = &self.prompt {
            ReplConfig {
                prompt: prompt.clone(),
                ..ReplConfig::default()
            }
            .validate()?;
        }
        Ok(())
    }
}

impl CliConfig {
    /// Loads the optional config file and applies command line overrides on top.
    pub fn resolve(&self) -> Result<ReplConfig> {
        self.validate()?;

        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let mut repl = file.repl;
        if let Some(prompt) = &self.prompt {
            repl.prompt = prompt.clone();
        }
        if self.no_color {
            repl.color = false;
        }
        repl.validate()?;
        Ok(repl)
    }
}
