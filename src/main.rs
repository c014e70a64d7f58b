use anyhow::Context;
use clap::Parser;
use public_config::utils::{logger, validation::Validate};
use public_config::{app_config, CliConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Logs go to stderr so stdout stays machine-readable
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // Resolve once from the process environment
    let config = app_config();

    // Validation only runs on request; resolution itself never fails
    if cli.check {
        if let Err(e) = config.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    // Render
    let rendered = match cli.format {
        OutputFormat::Env => config
            .env_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect::<String>(),
        OutputFormat::Json => {
            let mut json = config.to_json().context("rendering config as JSON")?;
            json.push('\n');
            json
        }
        OutputFormat::Toml => config.to_toml().context("rendering config as TOML")?,
    };
    print!("{}", rendered);

    Ok(())
}
