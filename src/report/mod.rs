pub mod json;
pub mod md;

use crate::error::LegisError;
use crate::types::report::LegislatorReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &LegislatorReport, format: OutputFormat) -> Result<String, LegisError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(LegisError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
