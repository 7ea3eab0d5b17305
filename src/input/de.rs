//! Lenient deserializers for records coming out of open-data exports.
//!
//! The upstream APIs are inconsistent about shapes: a collection with a single entry is sent as a
//! bare object, years and amounts arrive as either numbers or strings, and identifiers flip
//! between the two as well.

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, Error as _, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

struct RecordsVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for RecordsVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Vec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a record, an array of records or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(items)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(|item| vec![item])
    }
}

/// Accepts a missing value, `null`, a single record or an array of records.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_any(RecordsVisitor(PhantomData))
}

pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        None => String::new(),
        Some(NumberOrText::Int(value)) => value.to_string(),
        Some(NumberOrText::Float(value)) => value.to_string(),
        Some(NumberOrText::Text(value)) => value,
    })
}

pub fn lenient_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumberOrText::Int(value)) => i32::try_from(value).map_err(D::Error::custom),
        Some(NumberOrText::Float(value)) => Ok(value as i32),
        Some(NumberOrText::Text(value)) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid year: {trimmed}")))
        }
    }
}

pub fn optional_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let year = lenient_year(deserializer)?;
    Ok((year != 0).then_some(year))
}

pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberOrText::Int(value)) => Ok(value as f64),
        Some(NumberOrText::Float(value)) => Ok(value),
        Some(NumberOrText::Text(value)) => parse_amount(&value)
            .ok_or_else(|| D::Error::custom(format!("invalid amount: {}", value.trim()))),
    }
}

// Decimal comma is accepted when no decimal point is present ("1234,56").
fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return Some(value);
    }
    if !trimmed.contains('.') {
        return trimmed.replace(',', ".").parse().ok();
    }
    None
}
