use crate::score::keywords::TypeCodeSet;
use crate::types::config::RelatorConfig;
use crate::types::records::RapporteurAssignment;
use crate::types::report::RelatorScoreResult;

#[derive(Debug, Clone)]
pub struct RelatorScorer {
    amendment_codes: TypeCodeSet,
    bill_codes: TypeCodeSet,
    amendment_weight: u32,
    bill_weight: u32,
    other_weight: u32,
}

impl RelatorScorer {
    pub fn new(config: &RelatorConfig) -> Self {
        Self {
            amendment_codes: TypeCodeSet::new(&config.amendment_type_codes),
            bill_codes: TypeCodeSet::new(&config.bill_type_codes),
            amendment_weight: config.amendment_weight,
            bill_weight: config.bill_weight,
            other_weight: config.other_weight,
        }
    }

    pub fn score(&self, assignments: &[RapporteurAssignment]) -> RelatorScoreResult {
        let mut result = RelatorScoreResult::default();
        for assignment in assignments {
            let code = assignment.bill_type_code.as_str();
            if self.amendment_codes.contains(code) {
                result.score = result.score.saturating_add(self.amendment_weight);
                result.pec_count += 1;
            } else if self.bill_codes.contains(code) {
                result.score = result.score.saturating_add(self.bill_weight);
                result.bill_count += 1;
            } else {
                result.score = result.score.saturating_add(self.other_weight);
            }
        }
        result
    }
}

impl Default for RelatorScorer {
    fn default() -> Self {
        Self::new(&RelatorConfig::default())
    }
}
