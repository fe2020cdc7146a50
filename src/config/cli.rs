use crate::core::{DimensionOverrides, OutputFormat};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "box-volume")]
#[command(about = "Compute the volume of a cuboid")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Mode {
    /// Construct with defaults and print the volume
    Preset(DimensionArgs),
    /// Print each dimension, then the volume computed directly and via the method
    Inspect(DimensionArgs),
    /// Read height, width and length from stdin
    Interactive,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Preset(DimensionArgs::default())
    }
}

impl Mode {
    pub fn dimension_args(&self) -> DimensionArgs {
        match self {
            Mode::Preset(args) | Mode::Inspect(args) => *args,
            Mode::Interactive => DimensionArgs::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Args)]
pub struct DimensionArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,
}

impl From<DimensionArgs> for DimensionOverrides {
    fn from(args: DimensionArgs) -> Self {
        DimensionOverrides {
            length: args.length,
            width: args.width,
            height: args.height,
        }
    }
}

impl CliConfig {
    pub fn mode(&self) -> Mode {
        self.mode.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_preset() {
        let config = CliConfig::try_parse_from(["box-volume"]).unwrap();
        assert!(matches!(config.mode(), Mode::Preset(_)));
        assert_eq!(config.format, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_inspect_with_dimensions() {
        let config = CliConfig::try_parse_from([
            "box-volume",
            "--format",
            "csv",
            "inspect",
            "--length",
            "2",
            "--height",
            "-4",
        ])
        .unwrap();

        assert_eq!(config.format, Some(OutputFormat::Csv));
        let overrides = DimensionOverrides::from(config.mode().dimension_args());
        assert_eq!(overrides.length, Some(2));
        assert_eq!(overrides.width, None);
        assert_eq!(overrides.height, Some(-4));
    }

    #[test]
    fn test_interactive_takes_no_dimensions() {
        assert!(CliConfig::try_parse_from(["box-volume", "interactive"]).is_ok());
        assert!(CliConfig::try_parse_from(["box-volume", "interactive", "--length", "2"]).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(CliConfig::try_parse_from(["box-volume", "--format", "xml"]).is_err());
    }
}
