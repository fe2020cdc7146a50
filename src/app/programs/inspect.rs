use crate::core::{ConfigProvider, Cuboid, Program, Report};
use crate::utils::error::Result;

/// Reads each dimension through its accessor and compares the volume
/// computed outside the cuboid with the one from `Cuboid::volume`.
pub struct InspectProgram<C: ConfigProvider> {
    pub(crate) config: C,
}

impl<C: ConfigProvider> InspectProgram<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

/// Volume computed by the caller from the public accessors.
pub fn direct_volume(cuboid: &Cuboid) -> i64 {
    cuboid
        .height()
        .wrapping_mul(cuboid.width())
        .wrapping_mul(cuboid.length())
}

impl<C: ConfigProvider> Program for InspectProgram<C> {
    fn name(&self) -> &'static str {
        "inspect"
    }

    fn build(&mut self) -> Result<Cuboid> {
        Ok(Cuboid::from_overrides(&self.config.dimensions()))
    }

    fn report(&self, cuboid: &Cuboid) -> Report {
        let direct = direct_volume(cuboid);
        if direct != cuboid.volume() {
            tracing::warn!(
                "Direct volume {} differs from method volume {}",
                direct,
                cuboid.volume()
            );
        }
        Report::new(self.name(), cuboid).with_direct_volume(direct)
    }

    fn render_text(&self, report: &Report) -> Result<String> {
        let direct = report.direct_volume.unwrap_or(report.volume);
        Ok(format!(
            "Height: {}\nWidth: {}\nLength: {}\nVolume (calculated directly): {}\nVolume (via method): {}\n",
            report.height, report.width, report.length, direct, report.volume
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DimensionOverrides, OutputFormat};

    struct Defaults;

    impl ConfigProvider for Defaults {
        fn dimensions(&self) -> DimensionOverrides {
            DimensionOverrides::default()
        }

        fn output_format(&self) -> Option<OutputFormat> {
            None
        }
    }

    #[test]
    fn test_inspect_text_lists_dimensions_and_both_volumes() {
        let mut program = InspectProgram::new(Defaults);
        let cuboid = program.build().unwrap();
        let report = program.report(&cuboid);

        assert_eq!(report.direct_volume, Some(240));
        assert_eq!(
            program.render_text(&report).unwrap(),
            "Height: 10\nWidth: 4\nLength: 6\nVolume (calculated directly): 240\nVolume (via method): 240\n"
        );
    }

    #[test]
    fn test_direct_volume_matches_method() {
        for (l, w, h) in [(1, 2, 3), (0, 5, 7), (-3, 4, 5), (100, 100, 100)] {
            let cuboid = Cuboid::new(l, w, h);
            assert_eq!(direct_volume(&cuboid), cuboid.volume());
        }
    }
}
