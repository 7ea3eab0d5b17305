use crate::types::config::EfficiencyConfig;
use crate::types::report::{EfficiencyResult, EfficiencyTier};

pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, Copy)]
pub struct EfficiencyIndexCalculator {
    config: EfficiencyConfig,
}

impl EfficiencyIndexCalculator {
    pub fn new(config: &EfficiencyConfig) -> Self {
        Self { config: *config }
    }

    /// Productivity per `cost_divisor` currency units spent.
    pub fn compute(&self, total_cost: f64, productivity_score: f64) -> EfficiencyResult {
        if total_cost.is_nan() || total_cost <= 0.0 {
            return EfficiencyResult {
                index_label: NOT_APPLICABLE.to_string(),
                raw_value: 0.0,
                tier: EfficiencyTier::NotApplicable,
            };
        }

        let normalized_cost = total_cost / self.config.cost_divisor;
        let raw_value = productivity_score / normalized_cost;
        let tier = if raw_value > self.config.high_tier {
            EfficiencyTier::High
        } else if raw_value > self.config.medium_tier {
            EfficiencyTier::Medium
        } else {
            EfficiencyTier::Low
        };

        EfficiencyResult {
            index_label: one_decimal(raw_value),
            raw_value,
            tier,
        }
    }
}

// Ties round away from zero (0.25 -> "0.3"); `{:.1}` alone would round half to even.
fn one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

impl Default for EfficiencyIndexCalculator {
    fn default() -> Self {
        Self::new(&EfficiencyConfig::default())
    }
}
