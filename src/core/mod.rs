pub mod engine;
pub mod render;

pub use crate::domain::model::{
    Cuboid, Dimension, DimensionOverrides, OutputFormat, Report, DEFAULT_HEIGHT, DEFAULT_LENGTH,
    DEFAULT_WIDTH,
};
pub use crate::domain::ports::{ConfigProvider, Program};
pub use crate::utils::error::Result;
