use crate::domain::input::TokenReader;
use crate::utils::error::{BoxError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const DEFAULT_LENGTH: i64 = 6;
pub const DEFAULT_WIDTH: i64 = 4;
pub const DEFAULT_HEIGHT: i64 = 10;

/// One of the three edges of a cuboid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Height,
    Width,
    Length,
}

impl Dimension {
    /// Order in which the interactive prompt asks for values.
    pub const PROMPT_ORDER: [Dimension; 3] = [Dimension::Height, Dimension::Width, Dimension::Length];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Height => "height",
            Dimension::Width => "width",
            Dimension::Length => "length",
        }
    }

    pub fn prompt(&self) -> String {
        format!("Enter {}: ", self.as_str())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rectangular box. Dimensions are not validated: zero and negative
/// values are kept as given and simply multiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cuboid {
    length: i64,
    width: i64,
    height: i64,
}

impl Default for Cuboid {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Cuboid {
    pub fn new(length: i64, width: i64, height: i64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Builds a cuboid where every omitted dimension takes its default.
    pub fn from_overrides(overrides: &DimensionOverrides) -> Self {
        Self::new(
            overrides.length.unwrap_or(DEFAULT_LENGTH),
            overrides.width.unwrap_or(DEFAULT_WIDTH),
            overrides.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn set_length(&mut self, length: i64) {
        self.length = length;
    }

    pub fn set_width(&mut self, width: i64) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: i64) {
        self.height = height;
    }

    pub fn get(&self, dimension: Dimension) -> i64 {
        match dimension {
            Dimension::Height => self.height,
            Dimension::Width => self.width,
            Dimension::Length => self.length,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: i64) {
        match dimension {
            Dimension::Height => self.height = value,
            Dimension::Width => self.width = value,
            Dimension::Length => self.length = value,
        }
    }

    /// Product of the three dimensions. Wraps on overflow.
    pub fn volume(&self) -> i64 {
        self.length
            .wrapping_mul(self.width)
            .wrapping_mul(self.height)
    }

    /// `None` when the product does not fit in an `i64`.
    pub fn checked_volume(&self) -> Option<i64> {
        self.length
            .checked_mul(self.width)?
            .checked_mul(self.height)
    }

    /// Prompts for height, width and length in that order and reads one
    /// whitespace-delimited integer after each prompt.
    ///
    /// All three values are parsed before any field is written, so on error
    /// the cuboid keeps its previous dimensions.
    pub fn populate_interactively<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<()> {
        let mut tokens = TokenReader::new(input);
        let mut values = [0i64; 3];

        for (slot, dimension) in values.iter_mut().zip(Dimension::PROMPT_ORDER) {
            write!(output, "{}", dimension.prompt())?;
            output.flush()?;

            let token = tokens
                .next_token()?
                .ok_or_else(|| BoxError::MissingInputError {
                    field: dimension.to_string(),
                })?;
            *slot = std::str::from_utf8(&token)
                .ok()
                .and_then(|text| text.parse::<i64>().ok())
                .ok_or_else(|| BoxError::InputFormatError {
                    field: dimension.to_string(),
                    token: String::from_utf8_lossy(&token).into_owned(),
                })?;
            tracing::debug!("Read {} = {}", dimension, slot);
        }

        for (value, dimension) in values.into_iter().zip(Dimension::PROMPT_ORDER) {
            self.set(dimension, value);
        }
        Ok(())
    }

    pub fn display_volume<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "Volume: {}", self.volume())?;
        Ok(())
    }
}

/// Optional per-dimension values; `None` means "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionOverrides {
    pub length: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

impl DimensionOverrides {
    /// Values set in `other` win over values set in `self`.
    pub fn merged_with(self, other: DimensionOverrides) -> Self {
        Self {
            length: other.length.or(self.length),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(BoxError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// What a run produced, independent of how it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub mode: String,
    pub length: i64,
    pub width: i64,
    pub height: i64,
    pub volume: i64,
    pub direct_volume: Option<i64>,
}

impl Report {
    pub fn new(mode: &str, cuboid: &Cuboid) -> Self {
        Self {
            mode: mode.to_string(),
            length: cuboid.length(),
            width: cuboid.width(),
            height: cuboid.height(),
            volume: cuboid.volume(),
            direct_volume: None,
        }
    }

    pub fn with_direct_volume(mut self, direct_volume: i64) -> Self {
        self.direct_volume = Some(direct_volume);
        self
    }
}
