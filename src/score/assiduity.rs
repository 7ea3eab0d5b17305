use crate::types::config::AssiduityConfig;
use crate::types::records::ActivityEvent;
use crate::types::report::{AssiduityLabel, AssiduityResult};

pub const NO_DATA_DESCRIPTION: &str = "Awaiting official data...";
pub const ACTIVITY_DESCRIPTION: &str = "Recorded activities (sessions/committees)";

/// Counts plenary sessions, committee meetings and hearings as an attendance proxy.
///
/// Vote-level attendance is not reliably published, so raw event counts stand in for it.
#[derive(Debug, Clone)]
pub struct AssiduityScorer {
    terms: Vec<String>,
    high_threshold: usize,
    medium_threshold: usize,
}

impl AssiduityScorer {
    pub fn new(config: &AssiduityConfig) -> Self {
        Self {
            terms: config
                .activity_terms
                .iter()
                .map(|term| term.trim().to_uppercase())
                .filter(|term| !term.is_empty())
                .collect(),
            high_threshold: config.high_threshold,
            medium_threshold: config.medium_threshold,
        }
    }

    pub fn score(&self, events: &[ActivityEvent]) -> AssiduityResult {
        if events.is_empty() {
            return AssiduityResult {
                score: 0,
                label: AssiduityLabel::NoData,
                description: NO_DATA_DESCRIPTION.to_string(),
            };
        }

        let score = events.iter().filter(|event| self.is_relevant(event)).count();
        AssiduityResult {
            score,
            label: self.label(score),
            description: ACTIVITY_DESCRIPTION.to_string(),
        }
    }

    fn is_relevant(&self, event: &ActivityEvent) -> bool {
        let kind = event.activity_type.to_uppercase();
        self.terms.iter().any(|term| kind.contains(term.as_str()))
    }

    fn label(&self, score: usize) -> AssiduityLabel {
        if score > self.high_threshold {
            AssiduityLabel::High
        } else if score > self.medium_threshold {
            AssiduityLabel::Medium
        } else {
            AssiduityLabel::Low
        }
    }
}

impl Default for AssiduityScorer {
    fn default() -> Self {
        Self::new(&AssiduityConfig::default())
    }
}
