use anyhow::Context;
use clap::Parser;
use pretty_numbers::utils::logger;
use pretty_numbers::{CliConfig, Repl};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let repl_config = match config.resolve() {
        Ok(repl_config) => repl_config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            return Ok(ExitCode::from(2));
        }
    };
    if !repl_config.color {
        console::set_colors_enabled(false);
    }

    let repl = Repl::new(repl_config);

    // 指令列直接給數字時只格式化一次
    if !config.values.is_empty() {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let rejected = repl
            .format_all(&config.values, &mut stdout.lock(), &mut stderr.lock())
            .context("failed to write formatted values")?;
        tracing::debug!("Formatted {} values, {} rejected", config.values.len(), rejected);
        return Ok(if rejected == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    tracing::info!("Starting interactive prompt");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl.run(stdin.lock(), &mut stdout.lock())
        .context("interactive prompt failed")?;

    Ok(ExitCode::SUCCESS)
}
