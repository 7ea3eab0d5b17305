use crate::error::Result;
use crate::score::keywords::{KeywordPattern, TypeCodeSet};
use crate::score::normalize::normalize;
use crate::types::config::ComplexConfig;
use crate::types::records::Bill;

#[derive(Debug, Clone)]
pub struct ComplexProjectFilter {
    type_codes: TypeCodeSet,
    keywords: KeywordPattern,
    max_results: usize,
}

impl ComplexProjectFilter {
    pub fn new(config: &ComplexConfig) -> Result<Self> {
        Ok(Self {
            type_codes: TypeCodeSet::new(&config.type_codes),
            keywords: KeywordPattern::compile("complex.keywords", &config.keywords)?,
            max_results: config.max_results,
        })
    }

    pub fn is_complex(&self, bill: &Bill) -> bool {
        self.type_codes.contains(&bill.type_code)
            || self.keywords.is_match(&normalize(Some(bill.summary.as_str())))
    }

    /// Most recent first, capped at `max_results`. Equal years keep input order.
    pub fn filter(&self, bills: &[Bill]) -> Vec<Bill> {
        let mut complex: Vec<Bill> = bills
            .iter()
            .filter(|bill| self.is_complex(bill))
            .cloned()
            .collect();
        complex.sort_by(|a, b| b.year.cmp(&a.year));
        complex.truncate(self.max_results);
        complex
    }
}
