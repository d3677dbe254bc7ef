use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hrtime::OutputFormat;
use hrtime::commands;
use hrtime::commands::format::OptionOverrides;
use hrtime::config;
use hrtime::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hrt")]
#[command(about = "Render durations in seconds as human readable text")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.hrtime/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a duration given in seconds
    Format(FormatArgs),
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct FormatArgs {
    #[arg(help = "Duration in seconds", allow_negative_numbers = true)]
    seconds: i64,

    #[arg(long, conflicts_with = "no_weeks", help = "Break out weeks")]
    weeks: bool,
    #[arg(long)]
    no_weeks: bool,

    #[arg(long, conflicts_with = "no_days", help = "Break out days")]
    days: bool,
    #[arg(long)]
    no_days: bool,

    #[arg(long, conflicts_with = "no_hours", help = "Break out hours")]
    hours: bool,
    #[arg(long)]
    no_hours: bool,

    #[arg(long, conflicts_with = "no_pad", help = "Zero-pad values to 2 digits")]
    pad: bool,
    #[arg(long)]
    no_pad: bool,

    #[arg(long, value_enum, help = "Output format (defaults to config)")]
    format: Option<OutputFormat>,
}

impl FormatArgs {
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            weeks: flag(self.weeks, self.no_weeks),
            days: flag(self.days, self.no_days),
            hours: flag(self.hours, self.no_hours),
            pad: flag(self.pad, self.no_pad),
        }
    }
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    List,
    /// Print a single value, e.g. `format.pad`
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(logging::level_for_verbosity(cli.verbose));

    let config = config::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Format(args) => {
            let options = args.overrides().apply(config.format);
            let output = args.format.unwrap_or(config.output.format);
            commands::format::format(args.seconds, options, output)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
