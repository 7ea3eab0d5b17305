//! Input records as handed over by the fetching layer.
//!
//! Field names are snake_case; the Chamber/Senate open-data names are accepted as aliases so
//! exports can be fed in without a mapping step.

use crate::input::de;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(default, alias = "descricaoTipo", deserialize_with = "de::lenient_string")]
    pub activity_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub id: String,
    #[serde(default, alias = "siglaTipo", deserialize_with = "de::lenient_string")]
    pub type_code: String,
    #[serde(default, alias = "numero", deserialize_with = "de::lenient_string")]
    pub number: String,
    #[serde(default, alias = "ano", deserialize_with = "de::lenient_year")]
    pub year: i32,
    #[serde(default, alias = "ementa", deserialize_with = "de::lenient_string")]
    pub summary: String,
}

impl Bill {
    /// Short label such as `PL 1234/2023`.
    pub fn label(&self) -> String {
        format!("{} {}/{}", self.type_code.trim(), self.number, self.year)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RapporteurAssignment {
    #[serde(default, alias = "siglaTipo", deserialize_with = "de::lenient_string")]
    pub bill_type_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitteeMembership {
    #[serde(default, alias = "nomeComissao", deserialize_with = "de::lenient_string")]
    pub committee_name: String,
    #[serde(default, alias = "siglaComissao", deserialize_with = "de::lenient_string")]
    pub committee_acronym: String,
    #[serde(
        default,
        alias = "descricaoParticipacao",
        deserialize_with = "de::lenient_string"
    )]
    pub role_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    #[serde(
        default,
        alias = "tipoDespesa",
        alias = "DescricaoDespesa",
        deserialize_with = "de::lenient_string"
    )]
    pub category: String,
    #[serde(
        default,
        alias = "valorLiquido",
        alias = "ValorReembolsado",
        deserialize_with = "de::lenient_amount"
    )]
    pub amount: f64,
}

/// Every collection known for one legislator, already fetched and concatenated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordBundle {
    #[serde(default)]
    pub legislator: Option<String>,
    #[serde(default, deserialize_with = "de::optional_year")]
    pub year: Option<i32>,
    /// Overrides the relator + committee productivity when present.
    #[serde(default)]
    pub productivity_score: Option<f64>,
    #[serde(default, alias = "eventos", deserialize_with = "de::records")]
    pub events: Vec<ActivityEvent>,
    #[serde(default, alias = "proposicoes", deserialize_with = "de::records")]
    pub bills: Vec<Bill>,
    #[serde(default, alias = "relatorias", deserialize_with = "de::records")]
    pub rapporteur_assignments: Vec<RapporteurAssignment>,
    #[serde(default, alias = "comissoes", deserialize_with = "de::records")]
    pub committee_memberships: Vec<CommitteeMembership>,
    #[serde(default, alias = "despesas", deserialize_with = "de::records")]
    pub expenses: Vec<ExpenseItem>,
}
