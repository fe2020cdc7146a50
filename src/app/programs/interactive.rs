use crate::core::{Cuboid, Program, Report};
use crate::utils::error::{BoxError, Result};
use std::io::{self, BufRead, Write};

/// Asks the user for height, width and length, then reports the volume.
pub struct InteractiveProgram<R: BufRead, W: Write> {
    input: R,
    prompts: W,
}

impl<R: BufRead, W: Write> InteractiveProgram<R, W> {
    pub fn new(input: R, prompts: W) -> Self {
        Self { input, prompts }
    }

    pub fn into_prompts(self) -> W {
        self.prompts
    }
}

impl<R: BufRead, W: Write> Program for InteractiveProgram<R, W> {
    fn name(&self) -> &'static str {
        "interactive"
    }

    fn build(&mut self) -> Result<Cuboid> {
        let mut cuboid = Cuboid::default();
        cuboid.populate_interactively(&mut self.input, &mut self.prompts)?;
        Ok(cuboid)
    }

    fn report(&self, cuboid: &Cuboid) -> Report {
        Report::new(self.name(), cuboid)
    }

    fn render_text(&self, report: &Report) -> Result<String> {
        let cuboid = Cuboid::new(report.length, report.width, report.height);
        let mut text = Vec::new();
        cuboid.display_volume(&mut text)?;
        String::from_utf8(text)
            .map_err(|e| BoxError::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_interactive_reads_and_reports() {
        let mut program = InteractiveProgram::new(Cursor::new("10\n4\n6\n"), Vec::new());
        let cuboid = program.build().unwrap();
        let report = program.report(&cuboid);

        assert_eq!((report.height, report.width, report.length), (10, 4, 6));
        assert_eq!(program.render_text(&report).unwrap(), "Volume: 240\n");
        assert_eq!(
            String::from_utf8(program.into_prompts()).unwrap(),
            "Enter height: Enter width: Enter length: "
        );
    }

    #[test]
    fn test_interactive_fails_on_empty_input() {
        let mut program = InteractiveProgram::new(Cursor::new(""), Vec::new());
        let err = program.build().unwrap_err();
        assert!(matches!(err, BoxError::MissingInputError { .. }));
    }
}
