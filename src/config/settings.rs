use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, DimensionOverrides, OutputFormat};

/// Effective configuration after layering: command line over config file
/// over built-in defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub dimensions: DimensionOverrides,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(
        file: Option<&TomlConfig>,
        dimensions: DimensionOverrides,
        format: Option<OutputFormat>,
    ) -> Self {
        let file_dimensions = file.map(|f| f.dimensions()).unwrap_or_default();
        let file_format = file.and_then(|f| f.output_format());

        Self {
            dimensions: file_dimensions.merged_with(dimensions),
            format: format.or(file_format).unwrap_or_default(),
        }
    }
}

impl ConfigProvider for Settings {
    fn dimensions(&self) -> DimensionOverrides {
        self.dimensions
    }

    fn output_format(&self) -> Option<OutputFormat> {
        Some(self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_no_flags_is_default() {
        let settings = Settings::resolve(None, DimensionOverrides::default(), None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_wins_over_file() {
        let file = TomlConfig::from_toml_str(
            "[dimensions]\nlength = 2\nwidth = 3\n\n[output]\nformat = \"csv\"\n",
        )
        .unwrap();
        let cli = DimensionOverrides {
            length: None,
            width: Some(7),
            height: Some(1),
        };

        let settings = Settings::resolve(Some(&file), cli, Some(OutputFormat::Json));

        assert_eq!(settings.dimensions.length, Some(2));
        assert_eq!(settings.dimensions.width, Some(7));
        assert_eq!(settings.dimensions.height, Some(1));
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_file_format_used_without_flag() {
        let file = TomlConfig::from_toml_str("[output]\nformat = \"csv\"\n").unwrap();
        let settings = Settings::resolve(Some(&file), DimensionOverrides::default(), None);
        assert_eq!(settings.format, OutputFormat::Csv);
    }
}
