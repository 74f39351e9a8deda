use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "gemini-chat",
    version,
    about = "Terminal chat widget backed by the Gemini API"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(long)]
    pub config: Option<String>,
    /// Model name, overrides `transport.model`
    #[arg(long)]
    pub model: Option<String>,
    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Chat)]
    pub mode: RunMode,
    /// Prompt for `--mode once`
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive chat widget
    Chat,
    /// Send one prompt and print the reply
    Once,
}
