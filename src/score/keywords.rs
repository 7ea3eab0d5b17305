use crate::error::{LegisError, Result};
use crate::score::normalize::{normalize, type_code};
use regex::Regex;
use std::collections::HashSet;

/// Substring alternation over normalized keywords, matched against normalized text.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Regex,
}

impl KeywordPattern {
    pub fn compile(name: &str, keywords: &[String]) -> Result<Self> {
        let alternation = keywords
            .iter()
            .map(|keyword| normalize(Some(keyword.trim())))
            .filter(|keyword| !keyword.is_empty())
            .map(|keyword| regex::escape(&keyword))
            .collect::<Vec<_>>()
            .join("|");
        if alternation.is_empty() {
            return Err(LegisError::InvalidPattern(
                name.to_string(),
                "no keywords".to_string(),
            ));
        }
        let regex = Regex::new(&format!("(?:{alternation})"))
            .map_err(|e| LegisError::InvalidPattern(name.to_string(), e.to_string()))?;
        Ok(Self { regex })
    }

    /// `text` must already be normalized.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Set of bill type codes compared after trimming and uppercasing.
#[derive(Debug, Clone, Default)]
pub struct TypeCodeSet {
    codes: HashSet<String>,
}

impl TypeCodeSet {
    pub fn new(codes: &[String]) -> Self {
        Self {
            codes: codes
                .iter()
                .map(|code| type_code(code))
                .filter(|code| !code.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(&type_code(code))
    }
}
