use crate::core::{ConfigProvider, Cuboid, Program, Report};
use crate::utils::error::Result;

/// Constructs the cuboid through its defaulted constructor and reports only
/// the volume.
pub struct PresetProgram<C: ConfigProvider> {
    pub(crate) config: C,
}

impl<C: ConfigProvider> PresetProgram<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C: ConfigProvider> Program for PresetProgram<C> {
    fn name(&self) -> &'static str {
        "preset"
    }

    fn build(&mut self) -> Result<Cuboid> {
        let overrides = self.config.dimensions();
        tracing::debug!("Preset overrides: {:?}", overrides);
        Ok(Cuboid::from_overrides(&overrides))
    }

    fn report(&self, cuboid: &Cuboid) -> Report {
        Report::new(self.name(), cuboid)
    }

    fn render_text(&self, report: &Report) -> Result<String> {
        Ok(format!("The volume of the cuboid is: {}\n", report.volume))
    }
}
