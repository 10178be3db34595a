use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer: accepts codes served either as strings or as numbers
fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number code, found {}",
            other
        ))),
    }
}

// Catalogue models
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Brand {
    #[serde(deserialize_with = "deserialize_code")]
    pub code: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Model {
    #[serde(deserialize_with = "deserialize_code")]
    pub code: String,
    pub name: String,
}

/// A year/fuel option for one model, e.g. `2014-1` / `2014 Gasolina`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct YearOption {
    #[serde(rename = "code", deserialize_with = "deserialize_code")]
    pub year_code: String,
    #[serde(rename = "name")]
    pub label: String,
}

/// A year/fuel combination available across every model of a brand
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FuelYearEntry {
    #[serde(rename = "code", deserialize_with = "deserialize_code")]
    pub year_code: String,
    #[serde(rename = "name")]
    pub fuel_label: String,
}

/// A model sold under a given brand and year code
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ModelAtYear {
    #[serde(rename = "code", deserialize_with = "deserialize_code")]
    pub model_code: String,
    #[serde(rename = "name")]
    pub model_label: String,
}

// Price models
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub brand: String,
    pub fuel: String,
    pub model: String,
    pub model_year: i32,
    pub price: String,
}
