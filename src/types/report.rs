use crate::types::records::Bill;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssiduityLabel {
    NoData,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssiduityResult {
    pub score: usize,
    pub label: AssiduityLabel,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Pecs,
    Security,
    Economy,
    Education,
    Health,
    Other,
}

impl Theme {
    /// Display and bucket order.
    pub const ALL: [Theme; 6] = [
        Theme::Pecs,
        Theme::Security,
        Theme::Economy,
        Theme::Education,
        Theme::Health,
        Theme::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pecs => "pecs",
            Self::Security => "security",
            Self::Economy => "economy",
            Self::Education => "education",
            Self::Health => "health",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bucket per theme, always all six, each in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ThematicBuckets {
    buckets: Vec<(Theme, Vec<Bill>)>,
}

impl ThematicBuckets {
    pub fn new() -> Self {
        Self {
            buckets: Theme::ALL.iter().map(|theme| (*theme, Vec::new())).collect(),
        }
    }

    pub fn push(&mut self, theme: Theme, bill: Bill) {
        if let Some((_, bills)) = self.buckets.iter_mut().find(|(t, _)| *t == theme) {
            bills.push(bill);
        }
    }

    pub fn get(&self, theme: Theme) -> &[Bill] {
        self.buckets
            .iter()
            .find(|(t, _)| *t == theme)
            .map(|(_, bills)| bills.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Theme, &[Bill])> {
        self.buckets
            .iter()
            .map(|(theme, bills)| (*theme, bills.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, bills)| bills.len()).sum()
    }
}

impl Serialize for ThematicBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (theme, bills) in &self.buckets {
            map.serialize_entry(theme.as_str(), bills)?;
        }
        map.end()
    }
}

impl Default for ThematicBuckets {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RelatorScoreResult {
    pub score: u32,
    pub pec_count: u32,
    pub bill_count: u32,
}

impl RelatorScoreResult {
    pub fn summary(&self) -> String {
        format!("{} PECs, {} bills reported", self.pec_count, self.bill_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StrategicCommitteeResult {
    pub score: u32,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyTier {
    Low,
    Medium,
    High,
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyResult {
    pub index_label: String,
    pub raw_value: f64,
    pub tier: EfficiencyTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExpenseSummary {
    pub total: f64,
    pub categories: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegislatorReport {
    pub legislator: Option<String>,
    pub year: Option<i32>,
    pub generated_at: String,
    pub assiduity: AssiduityResult,
    pub complex_projects: Vec<Bill>,
    pub themes: ThematicBuckets,
    pub relator: RelatorScoreResult,
    pub strategic_committees: StrategicCommitteeResult,
    pub productivity_score: f64,
    pub expenses: ExpenseSummary,
    pub efficiency: EfficiencyResult,
}
