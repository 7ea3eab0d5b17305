use crate::error::LegisError;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub assiduity: AssiduityConfig,
    pub complex: ComplexConfig,
    pub themes: ThemeConfig,
    pub relator: RelatorConfig,
    pub committees: CommitteeConfig,
    pub efficiency: EfficiencyConfig,
    pub expenses: ExpenseConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssiduityConfig {
    /// Matched case-insensitively against the raw event type, accents included.
    pub activity_terms: Vec<String>,
    pub high_threshold: usize,
    pub medium_threshold: usize,
}

impl Default for AssiduityConfig {
    fn default() -> Self {
        Self {
            activity_terms: strings(&["SESSÃO", "REUNIÃO", "AUDIÊNCIA"]),
            high_threshold: 100,
            medium_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplexConfig {
    pub type_codes: Vec<String>,
    pub keywords: Vec<String>,
    pub max_results: usize,
}

impl Default for ComplexConfig {
    fn default() -> Self {
        Self {
            type_codes: strings(&["PEC", "PLP"]),
            keywords: strings(&[
                "CÓDIGO",
                "REFORMA",
                "DIRETRIZES NACIONAIS",
                "ESTATUTO",
                "MARCO LEGAL",
                "LEI COMPLEMENTAR",
                "SISTEMA NACIONAL",
                "POLÍTICA NACIONAL",
                "PEC",
                "PLP",
            ]),
            max_results: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub amendment_type_codes: Vec<String>,
    pub security: Vec<String>,
    pub economy: Vec<String>,
    pub education: Vec<String>,
    pub health: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            amendment_type_codes: strings(&["PEC"]),
            security: strings(&[
                "CRIME", "PENA", "POLICIA", "SEGURANCA", "ARMAS", "PRESIDIO", "DROGA",
                "CORRUPCAO", "LAVAGEM", "PENAL", "DETENCAO",
            ]),
            economy: strings(&[
                "IMPOSTO",
                "TRIBUT",
                "TAXA",
                "ECONOMIA",
                "GASTO",
                "ORCAMENTO",
                "PRIVATIZA",
                "RECEITA",
                "FISCAL",
                "MOEDA",
                "CREDITO",
                "FINAN",
            ]),
            education: strings(&[
                "EDUCA",
                "ESCOLA",
                "ENSINO",
                "PROFESSOR",
                "ALUNO",
                "UNIVERSIDADE",
                "CURRICULO",
                "PEDAGOG",
            ]),
            health: strings(&[
                "SAUDE", "HOSPITAL", "MEDICO", "REMEDIO", "SUS", "DOENCA", "VACINA", "ENFERME",
            ]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelatorConfig {
    pub amendment_type_codes: Vec<String>,
    pub bill_type_codes: Vec<String>,
    pub amendment_weight: u32,
    pub bill_weight: u32,
    pub other_weight: u32,
}

impl Default for RelatorConfig {
    fn default() -> Self {
        Self {
            amendment_type_codes: strings(&["PEC"]),
            bill_type_codes: strings(&["PL", "PLC", "PLS"]),
            amendment_weight: 10,
            bill_weight: 5,
            other_weight: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommitteeConfig {
    pub strategic_acronyms: Vec<String>,
    pub full_member_term: String,
    pub alternate_term: String,
    pub chair_term: String,
    pub full_member_points: u32,
    pub alternate_points: u32,
    pub chair_bonus: u32,
}

impl Default for CommitteeConfig {
    fn default() -> Self {
        Self {
            strategic_acronyms: strings(&["CCJ", "CAE"]),
            full_member_term: "TITULAR".to_string(),
            alternate_term: "SUPLENTE".to_string(),
            chair_term: "PRESIDENTE".to_string(),
            full_member_points: 100,
            alternate_points: 50,
            chair_bonus: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EfficiencyConfig {
    pub cost_divisor: f64,
    pub high_tier: f64,
    pub medium_tier: f64,
}

impl Default for EfficiencyConfig {
    fn default() -> Self {
        Self {
            cost_divisor: 100_000.0,
            high_tier: 10.0,
            medium_tier: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpenseConfig {
    pub top_categories: usize,
}

impl Default for ExpenseConfig {
    fn default() -> Self {
        Self { top_categories: 6 }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), LegisError> {
        let assiduity = &self.assiduity;
        validate_terms("assiduity.activity_terms", &assiduity.activity_terms)?;
        if assiduity.medium_threshold >= assiduity.high_threshold {
            return Err(LegisError::ConfigParse(format!(
                "assiduity.medium_threshold ({}) must be lower than assiduity.high_threshold ({})",
                assiduity.medium_threshold, assiduity.high_threshold
            )));
        }

        validate_terms("complex.type_codes", &self.complex.type_codes)?;
        validate_terms("complex.keywords", &self.complex.keywords)?;
        if self.complex.max_results == 0 {
            return Err(LegisError::ConfigParse(
                "complex.max_results must be greater than 0".to_string(),
            ));
        }

        validate_terms("themes.amendment_type_codes", &self.themes.amendment_type_codes)?;
        validate_terms("themes.security", &self.themes.security)?;
        validate_terms("themes.economy", &self.themes.economy)?;
        validate_terms("themes.education", &self.themes.education)?;
        validate_terms("themes.health", &self.themes.health)?;

        let relator = &self.relator;
        validate_terms("relator.amendment_type_codes", &relator.amendment_type_codes)?;
        validate_terms("relator.bill_type_codes", &relator.bill_type_codes)?;
        validate_disjoint_codes(&relator.amendment_type_codes, &relator.bill_type_codes)?;
        for (name, weight) in [
            ("relator.amendment_weight", relator.amendment_weight),
            ("relator.bill_weight", relator.bill_weight),
            ("relator.other_weight", relator.other_weight),
        ] {
            if weight == 0 {
                return Err(LegisError::ConfigParse(format!(
                    "{name} must be greater than 0"
                )));
            }
        }

        let committees = &self.committees;
        validate_terms("committees.strategic_acronyms", &committees.strategic_acronyms)?;
        for (name, term) in [
            ("committees.full_member_term", &committees.full_member_term),
            ("committees.alternate_term", &committees.alternate_term),
            ("committees.chair_term", &committees.chair_term),
        ] {
            if term.trim().is_empty() {
                return Err(LegisError::ConfigParse(format!("{name} must be non-empty")));
            }
        }
        for (name, points) in [
            ("committees.full_member_points", committees.full_member_points),
            ("committees.alternate_points", committees.alternate_points),
            ("committees.chair_bonus", committees.chair_bonus),
        ] {
            if points == 0 {
                return Err(LegisError::ConfigParse(format!(
                    "{name} must be greater than 0"
                )));
            }
        }

        let efficiency = &self.efficiency;
        if !(efficiency.cost_divisor.is_finite() && efficiency.cost_divisor > 0.0) {
            return Err(LegisError::ConfigParse(
                "efficiency.cost_divisor must be a positive number".to_string(),
            ));
        }
        if !(efficiency.medium_tier.is_finite() && efficiency.high_tier.is_finite())
            || efficiency.medium_tier >= efficiency.high_tier
        {
            return Err(LegisError::ConfigParse(format!(
                "efficiency.medium_tier ({}) must be lower than efficiency.high_tier ({})",
                efficiency.medium_tier, efficiency.high_tier
            )));
        }

        if self.expenses.top_categories == 0 {
            return Err(LegisError::ConfigParse(
                "expenses.top_categories must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_terms(field: &str, terms: &[String]) -> Result<(), LegisError> {
    if terms.is_empty() {
        return Err(LegisError::ConfigParse(format!("{field} cannot be empty")));
    }
    let mut seen = HashSet::new();
    for term in terms {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(LegisError::ConfigParse(format!(
                "{field} entries must be non-empty"
            )));
        }
        if !seen.insert(trimmed.to_uppercase()) {
            return Err(LegisError::ConfigParse(format!(
                "{field} contains duplicate entry: {trimmed}"
            )));
        }
    }
    Ok(())
}

fn validate_disjoint_codes(amendments: &[String], bills: &[String]) -> Result<(), LegisError> {
    let amendment_codes: HashSet<String> = amendments
        .iter()
        .map(|code| code.trim().to_uppercase())
        .collect();
    if let Some(code) = bills
        .iter()
        .find(|code| amendment_codes.contains(&code.trim().to_uppercase()))
    {
        return Err(LegisError::ConfigParse(format!(
            "type code '{}' cannot appear in both relator.amendment_type_codes and relator.bill_type_codes",
            code.trim()
        )));
    }
    Ok(())
}
