use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";

/// A GDP figure as stored in the dataset: a number, or a label such as `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gdp {
    Amount(f64),
    Label(String),
}

impl Gdp {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Gdp::Amount(value) => Some(*value),
            Gdp::Label(_) => None,
        }
    }
}

impl Default for Gdp {
    fn default() -> Self {
        Gdp::Label(NOT_AVAILABLE.to_string())
    }
}

/// One entry of the dataset file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "GDP", default, skip_serializing_if = "Option::is_none")]
    pub gdp: Option<Gdp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_export: Option<String>,
}

/// The attribute triple a player has to match to a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub gdp: Gdp,
    pub flag: String,
    pub top_export: String,
}

impl Gdp {
    /// Reads a GDP value leniently: numbers and strings are kept, anything
    /// else counts as unknown.
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(number)) => number.as_f64().map(Gdp::Amount).unwrap_or_default(),
            Some(Value::String(label)) => Gdp::Label(label.clone()),
            _ => Gdp::default(),
        }
    }
}

/// Turns one raw dataset entry into its key and attributes. Only a string
/// `country` is required; other fields fall back to their defaults when
/// missing or of the wrong type.
pub fn country_entry(record: &Value) -> Option<(String, CountryInfo)> {
    let country = record.get("country")?.as_str()?.to_string();
    let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_string);

    let info = CountryInfo {
        gdp: Gdp::from_value(record.get("GDP")),
        flag: text("flag_url").unwrap_or_default(),
        top_export: text("top_export").unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    };
    Some((country, info))
}

pub type CountryData = IndexMap<String, CountryInfo>;
