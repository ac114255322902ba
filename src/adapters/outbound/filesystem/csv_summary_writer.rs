use crate::license_resolution::domain::ResolvedComponent;
use crate::ports::outbound::SummaryWriter;
use crate::shared::error::EnricherError;
use crate::shared::security::validate_output_target;
use crate::shared::Result;
use std::fs;
use std::path::Path;

const HEADER: [&str; 3] = ["Package Name", "Version", "License"];

/// CsvSummaryWriter adapter for the per-component license table
///
/// Fields containing a comma, quote or line break are quoted as in RFC 4180.
/// Records end in `\n`.
pub struct CsvSummaryWriter;

impl CsvSummaryWriter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the rows, header included
    pub fn render(rows: &[ResolvedComponent]) -> String {
        let mut out = String::new();
        push_record(&mut out, &HEADER);
        for row in rows {
            push_record(&mut out, &[row.name.as_str(), row.version.as_str(), row.label.as_str()]);
        }
        out
    }
}

impl Default for CsvSummaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryWriter for CsvSummaryWriter {
    fn write_summary(&self, rows: &[ResolvedComponent], path: &Path) -> Result<()> {
        validate_output_target(path)?;

        fs::write(path, Self::render(rows)).map_err(|e| {
            EnricherError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

fn push_record(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
