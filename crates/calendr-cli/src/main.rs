mod components;

use clap::{Parser, Subcommand};
use components::pick::{PickArgs, handle_pick};
use components::show::{ShowArgs, handle_show};
use dotenv::dotenv;

/// Date and date-range picker for the terminal
#[derive(Parser)]
#[command(name = "calendr", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a date or a range interactively and print the result as JSON
    Pick(PickArgs),

    /// Print the calendar panes for a configuration without a terminal UI
    Show(ShowArgs),
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenv().ok();
    color_eyre::install()?;
    let cli = Cli::parse();
    match cli.command {
        Commands::Pick(args) => handle_pick(args).await,
        Commands::Show(args) => {
            // the interactive picker installs its own in-memory logger
            env_logger::init();
            handle_show(args)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendr_core::{RangeCalendars, SelectionMode};

    #[test]
    fn test_show_flags_parse() {
        let cli = Cli::try_parse_from([
            "calendr",
            "show",
            "--mode",
            "range",
            "--range-calendars",
            "2",
            "--disabled-date",
            "2024-01-02",
            "--disabled-date",
            "2024-01-03",
            "--select",
            "2024-01-10",
        ])
        .unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.config.mode, Some(SelectionMode::Range));
                assert_eq!(args.config.range_calendars, Some(RangeCalendars::Two));
                assert_eq!(args.config.disabled_date.len(), 2);
                assert_eq!(args.select, vec!["2024-01-10".to_string()]);
            }
            Commands::Pick(_) => panic!("expected show"),
        }
    }

    #[test]
    fn test_bad_enum_flag_is_rejected() {
        assert!(Cli::try_parse_from(["calendr", "pick", "--mode", "multi"]).is_err());
    }
}
