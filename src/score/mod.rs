pub mod assiduity;
pub mod committees;
pub mod complex;
pub mod efficiency;
pub mod expenses;
pub mod keywords;
pub mod normalize;
pub mod relator;
pub mod thematic;

use crate::error::Result;
use crate::types::config::ScoringConfig;
use crate::types::records::RecordBundle;
use crate::types::report::LegislatorReport;
use assiduity::AssiduityScorer;
use chrono::Utc;
use committees::StrategicCommitteeScorer;
use complex::ComplexProjectFilter;
use efficiency::EfficiencyIndexCalculator;
use expenses::ExpenseAggregator;
use relator::RelatorScorer;
use thematic::ThematicClassifier;
use tracing::debug;

/// Every component, built once from configuration.
#[derive(Debug, Clone)]
pub struct Engine {
    pub assiduity: AssiduityScorer,
    pub complex: ComplexProjectFilter,
    pub themes: ThematicClassifier,
    pub relator: RelatorScorer,
    pub committees: StrategicCommitteeScorer,
    pub efficiency: EfficiencyIndexCalculator,
    pub expenses: ExpenseAggregator,
}

impl Engine {
    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            assiduity: AssiduityScorer::new(&config.assiduity),
            complex: ComplexProjectFilter::new(&config.complex)?,
            themes: ThematicClassifier::new(&config.themes)?,
            relator: RelatorScorer::new(&config.relator),
            committees: StrategicCommitteeScorer::new(&config.committees),
            efficiency: EfficiencyIndexCalculator::new(&config.efficiency),
            expenses: ExpenseAggregator::new(&config.expenses),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::from_config(&ScoringConfig::default())
    }

    pub fn evaluate(&self, bundle: &RecordBundle) -> LegislatorReport {
        let assiduity = self.assiduity.score(&bundle.events);
        debug!(score = assiduity.score, label = ?assiduity.label, "assiduity scored");

        let complex_projects = self.complex.filter(&bundle.bills);
        let themes = self.themes.classify_all(&bundle.bills);
        debug!(
            bills = bundle.bills.len(),
            complex = complex_projects.len(),
            "bills classified"
        );

        let relator = self.relator.score(&bundle.rapporteur_assignments);
        let strategic_committees = self.committees.score(&bundle.committee_memberships);
        debug!(
            relator = relator.score,
            committees = strategic_committees.score,
            "senate activity scored"
        );

        let productivity_score = bundle.productivity_score.unwrap_or_else(|| {
            f64::from(relator.score) + f64::from(strategic_committees.score)
        });
        let expenses = self.expenses.summarize(&bundle.expenses);
        let efficiency = self.efficiency.compute(expenses.total, productivity_score);
        debug!(
            cost = expenses.total,
            productivity = productivity_score,
            index = %efficiency.index_label,
            "efficiency computed"
        );

        LegislatorReport {
            legislator: bundle.legislator.clone(),
            year: bundle.year,
            generated_at: Utc::now().to_rfc3339(),
            assiduity,
            complex_projects,
            themes,
            relator,
            strategic_committees,
            productivity_score,
            expenses,
            efficiency,
        }
    }
}
