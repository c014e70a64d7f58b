use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `KEY=value` lines, suitable for `.env` files
    #[default]
    Env,
    Json,
    Toml,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "public-config")]
#[command(about = "Print the frontend's public configuration resolved from the environment")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = OutputFormat::Env)]
    pub format: OutputFormat,

    #[arg(long, help = "Fail if a resolved value is not an http(s) URL")]
    pub check: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
