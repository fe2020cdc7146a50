use crate::core::render::render;
use crate::core::{OutputFormat, Program, Report};
use crate::utils::error::Result;
use std::io::Write;

pub struct VolumeEngine<P: Program> {
    program: P,
    format: OutputFormat,
}

impl<P: Program> VolumeEngine<P> {
    pub fn new(program: P) -> Self {
        Self::with_format(program, OutputFormat::default())
    }

    pub fn with_format(program: P, format: OutputFormat) -> Self {
        Self { program, format }
    }

    /// Builds the cuboid, renders its report and writes it to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Report> {
        tracing::debug!("Running '{}' program", self.program.name());

        let cuboid = self.program.build()?;
        tracing::debug!(
            "Cuboid dimensions: length={}, width={}, height={}",
            cuboid.length(),
            cuboid.width(),
            cuboid.height()
        );

        if cuboid.checked_volume().is_none() {
            tracing::warn!(
                "Volume of {}x{}x{} overflows a 64-bit integer; reported value is wrapped",
                cuboid.length(),
                cuboid.width(),
                cuboid.height()
            );
        }

        let report = self.program.report(&cuboid);
        let rendered = render(&self.program, &report, self.format)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;

        tracing::info!("Volume computed: {}", report.volume);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::programs::interactive::InteractiveProgram;
    use crate::utils::error::BoxError;
    use std::io::Cursor;

    #[test]
    fn test_engine_writes_rendered_report() {
        let program = InteractiveProgram::new(Cursor::new("2 3 4\n"), Vec::new());
        let mut engine = VolumeEngine::new(program);
        let mut out = Vec::new();

        let report = engine.run(&mut out).unwrap();

        assert_eq!(report.volume, 24);
        assert_eq!(String::from_utf8(out).unwrap(), "Volume: 24\n");
    }

    #[test]
    fn test_engine_json_format() {
        let program = InteractiveProgram::new(Cursor::new("10\n4\n6\n"), Vec::new());
        let mut engine = VolumeEngine::with_format(program, OutputFormat::Json);
        let mut out = Vec::new();

        engine.run(&mut out).unwrap();

        let report: Report = serde_json::from_slice(&out).unwrap();
        assert_eq!(report.mode, "interactive");
        assert_eq!(report.volume, 240);
    }

    #[test]
    fn test_engine_writes_nothing_on_bad_input() {
        let program = InteractiveProgram::new(Cursor::new("x\n"), Vec::new());
        let mut engine = VolumeEngine::new(program);
        let mut out = Vec::new();

        let err = engine.run(&mut out).unwrap_err();

        assert!(matches!(err, BoxError::InputFormatError { .. }));
        assert!(out.is_empty());
    }
}
