use crate::core::{OutputFormat, Program, Report};
use crate::utils::error::{BoxError, Result};
use std::io;

pub const CSV_HEADER: [&str; 6] = ["mode", "length", "width", "height", "volume", "direct_volume"];

/// Renders a report in the requested format. Text output is owned by the
/// program so each mode keeps its own wording.
pub fn render<P: Program + ?Sized>(program: &P, report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => program.render_text(report),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn render_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    writer.write_record([
        report.mode.clone(),
        report.length.to_string(),
        report.width.to_string(),
        report.height.to_string(),
        report.volume.to_string(),
        report
            .direct_volume
            .map(|v| v.to_string())
            .unwrap_or_default(),
    ])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| BoxError::IoError(io::Error::new(e.error().kind(), e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| BoxError::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))
}
