use crate::domain::model::{Cuboid, DimensionOverrides, OutputFormat, Report};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn dimensions(&self) -> DimensionOverrides;
    fn output_format(&self) -> Option<OutputFormat>;
}

/// One way of obtaining a cuboid and presenting its volume.
pub trait Program {
    fn name(&self) -> &'static str;
    fn build(&mut self) -> Result<Cuboid>;
    fn report(&self, cuboid: &Cuboid) -> Report;
    fn render_text(&self, report: &Report) -> Result<String>;
}
