use crate::error::Result;
use crate::score::keywords::{KeywordPattern, TypeCodeSet};
use crate::score::normalize::normalize;
use crate::types::config::ThemeConfig;
use crate::types::records::Bill;
use crate::types::report::{Theme, ThematicBuckets};

/// Single-label theme assignment; the first matching rule wins.
///
/// Rule order is policy: a summary mentioning both crime and taxes lands in `Security` because
/// security is checked before economy.
#[derive(Debug, Clone)]
pub struct ThematicClassifier {
    amendment_codes: TypeCodeSet,
    rules: Vec<(Theme, KeywordPattern)>,
}

impl ThematicClassifier {
    pub fn new(config: &ThemeConfig) -> Result<Self> {
        let rules = vec![
            (
                Theme::Security,
                KeywordPattern::compile("themes.security", &config.security)?,
            ),
            (
                Theme::Economy,
                KeywordPattern::compile("themes.economy", &config.economy)?,
            ),
            (
                Theme::Education,
                KeywordPattern::compile("themes.education", &config.education)?,
            ),
            (
                Theme::Health,
                KeywordPattern::compile("themes.health", &config.health)?,
            ),
        ];
        Ok(Self {
            amendment_codes: TypeCodeSet::new(&config.amendment_type_codes),
            rules,
        })
    }

    pub fn classify(&self, bill: &Bill) -> Theme {
        if self.amendment_codes.contains(&bill.type_code) {
            return Theme::Pecs;
        }

        let text = normalize(Some(bill.summary.as_str()));
        self.rules
            .iter()
            .find(|(_, pattern)| pattern.is_match(&text))
            .map(|(theme, _)| *theme)
            .unwrap_or(Theme::Other)
    }

    pub fn classify_all(&self, bills: &[Bill]) -> ThematicBuckets {
        let mut buckets = ThematicBuckets::new();
        for bill in bills {
            buckets.push(self.classify(bill), bill.clone());
        }
        buckets
    }
}
