use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Result card with indicators and a colour swatch
    #[default]
    Human,
    /// Single JSON object on stdout
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "datecheck",
    about = "Check a date for prime, palindrome, Armstrong and other number patterns",
    version,
    long_about = None,
    allow_negative_numbers = true
)]
pub struct Args {
    /// Month (1-12)
    #[arg(requires = "day", conflicts_with = "today")]
    pub month: Option<String>,

    /// Day of month (1-31)
    #[arg(requires = "year")]
    pub day: Option<String>,

    /// Year (1-2500)
    pub year: Option<String>,

    /// Analyze today's local date
    #[arg(long)]
    pub today: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
