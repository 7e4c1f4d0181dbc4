pub mod commands;
pub mod progress;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "vodostaj")]
#[command(about = "Terminal water-level report for Serbian river stations", long_about = None)]
pub struct Cli {
    /// History offset: 0 or absent reads the live feed, N >= 1 the N-th
    /// most recent archived capture
    pub offset: Option<usize>,

    /// List archived captures
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Show every station instead of the default river group
    #[arg(short, long)]
    pub all: bool,

    /// Save the rendered state as the new comparison baseline
    #[arg(short, long)]
    pub save: bool,

    /// Restore the previous baseline from the backup slot
    #[arg(long)]
    pub restore: bool,

    /// Display chart images for a station (name as in the config)
    #[arg(long, value_name = "STATION")]
    pub charts: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_shape() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_offset_and_flags_parse() {
        let cli = Cli::try_parse_from(["vodostaj", "2", "--all"]).unwrap();
        assert_eq!(cli.offset, Some(2));
        assert!(cli.all);
        assert!(!cli.save);
    }

    #[test]
    fn test_charts_takes_a_station_name() {
        let cli = Cli::try_parse_from(["vodostaj", "--charts", "NOVI_SAD"]).unwrap();
        assert_eq!(cli.charts.as_deref(), Some("NOVI_SAD"));
    }
}
