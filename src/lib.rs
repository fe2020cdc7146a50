pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Mode};
pub use config::{Settings, TomlConfig};

pub use app::programs::{
    inspect::InspectProgram, interactive::InteractiveProgram, preset::PresetProgram,
};
pub use core::{engine::VolumeEngine, ConfigProvider, Cuboid, DimensionOverrides, OutputFormat, Program, Report};
pub use utils::error::{BoxError, Result};
