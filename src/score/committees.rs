use crate::score::normalize::normalize;
use crate::types::config::CommitteeConfig;
use crate::types::records::CommitteeMembership;
use crate::types::report::StrategicCommitteeResult;

/// Scores seats on high-leverage committees (constitutional and economic affairs by default).
#[derive(Debug, Clone)]
pub struct StrategicCommitteeScorer {
    acronyms: Vec<String>,
    full_member_term: String,
    alternate_term: String,
    chair_term: String,
    full_member_points: u32,
    alternate_points: u32,
    chair_bonus: u32,
}

impl StrategicCommitteeScorer {
    pub fn new(config: &CommitteeConfig) -> Self {
        Self {
            acronyms: config
                .strategic_acronyms
                .iter()
                .map(|acronym| normalize(Some(acronym.trim())))
                .filter(|acronym| !acronym.is_empty())
                .collect(),
            full_member_term: normalize(Some(config.full_member_term.trim())),
            alternate_term: normalize(Some(config.alternate_term.trim())),
            chair_term: normalize(Some(config.chair_term.trim())),
            full_member_points: config.full_member_points,
            alternate_points: config.alternate_points,
            chair_bonus: config.chair_bonus,
        }
    }

    pub fn score(&self, memberships: &[CommitteeMembership]) -> StrategicCommitteeResult {
        let mut result = StrategicCommitteeResult::default();
        for membership in memberships {
            let points = self.points(membership);
            if points > 0 {
                result.score = result.score.saturating_add(points);
                result.roles.push(format!(
                    "{} ({})",
                    membership.committee_acronym, membership.role_description
                ));
            }
        }
        result
    }

    fn is_strategic(&self, membership: &CommitteeMembership) -> bool {
        let committee = if membership.committee_name.is_empty() {
            &membership.committee_acronym
        } else {
            &membership.committee_name
        };
        let committee = normalize(Some(committee.as_str()));
        self.acronyms
            .iter()
            .any(|acronym| committee.contains(acronym.as_str()))
    }

    fn points(&self, membership: &CommitteeMembership) -> u32 {
        if !self.is_strategic(membership) {
            return 0;
        }

        let role = normalize(Some(membership.role_description.as_str()));
        let mut points = 0;
        if role.contains(&self.full_member_term) {
            points = self.full_member_points;
        }
        // A role naming both seats ends up with alternate points; kept for compatibility.
        if role.contains(&self.alternate_term) {
            points = self.alternate_points;
        }
        if points > 0 && role.contains(&self.chair_term) {
            points = points.saturating_add(self.chair_bonus);
        }
        points
    }
}

impl Default for StrategicCommitteeScorer {
    fn default() -> Self {
        Self::new(&CommitteeConfig::default())
    }
}
