//! Configuration and CLI argument handling

use clap::Parser;

use crate::presets;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "egg-timer")]
#[command(about = "A terminal countdown driven by the countdown engine")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Preset slot to count down from (slot n is n x 30 seconds)
    #[arg(short, long, default_value = "10",
          value_parser = clap::value_parser!(u8).range(1..=presets::PRESET_SLOTS as i64))]
    pub preset: u8,

    /// Tick interval in milliseconds
    #[arg(short, long, default_value = "1000",
          value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Selected countdown duration in milliseconds
    pub fn duration_millis(&self) -> u64 {
        presets::slot_millis(self.preset)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pick_the_longest_preset() {
        let config = Config::try_parse_from(["egg-timer"]).unwrap();
        assert_eq!(config.preset, 10);
        assert_eq!(config.tick_ms, 1000);
        assert!(!config.verbose);
        assert_eq!(config.duration_millis(), 300_000);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn preset_slot_maps_to_thirty_second_steps() {
        let config = Config::try_parse_from(["egg-timer", "--preset", "1"]).unwrap();
        assert_eq!(config.duration_millis(), 30_000);
    }

    #[test]
    fn out_of_range_preset_is_rejected() {
        assert!(Config::try_parse_from(["egg-timer", "--preset", "0"]).is_err());
        assert!(Config::try_parse_from(["egg-timer", "--preset", "11"]).is_err());
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        assert!(Config::try_parse_from(["egg-timer", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn verbose_raises_the_log_level() {
        let config = Config::try_parse_from(["egg-timer", "--verbose"]).unwrap();
        assert_eq!(config.log_level(), "debug");
    }
}
