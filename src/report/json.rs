use crate::types::report::LegislatorReport;

pub fn to_json(report: &LegislatorReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
