use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::IgnoredAny;
use thiserror::Error;

use crate::models::country::{CountryRecord, Gdp};

pub const WORLD_BANK_GDP_URL: &str = "http://api.worldbank.org/v2/country/all/indicator/NY.GDP.MKTP.CD?format=json&per_page=300&date=2022";

const FLAG_URL_TEMPLATE: &str = "https://flagcdn.com/w320/{}.png";

const COUNTRY_CODES: [(&str, &str); 10] = [
    ("United States", "us"),
    ("China", "cn"),
    ("Japan", "jp"),
    ("Germany", "de"),
    ("United Kingdom", "gb"),
    ("France", "fr"),
    ("India", "in"),
    ("Italy", "it"),
    ("Brazil", "br"),
    ("Canada", "ca"),
];

const TOP_EXPORTS: [(&str, &str); 10] = [
    ("United States", "Aircraft"),
    ("China", "Electronics"),
    ("Japan", "Vehicles"),
    ("Germany", "Machinery"),
    ("United Kingdom", "Financial Services"),
    ("France", "Aircraft"),
    ("India", "Software Services"),
    ("Italy", "Fashion"),
    ("Brazil", "Soybeans"),
    ("Canada", "Oil"),
];

#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed indicator response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not encode dataset: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct IndicatorEntry {
    country: IndicatorCountry,
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct IndicatorCountry {
    value: String,
}

/// Parses a World Bank indicator page (`[metadata, entries]`) into GDP per
/// country in billions of US dollars, rounded to two decimals. Entries
/// without a value are dropped.
pub fn parse_indicator_response(body: &str) -> Result<HashMap<String, f64>, PrepareError> {
    let (_, entries): (IgnoredAny, Vec<IndicatorEntry>) = serde_json::from_str(body)?;

    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            let value = entry.value?;
            Some((entry.country.value, to_billions(value)))
        })
        .collect())
}

fn to_billions(value: f64) -> f64 {
    (value / 1e9 * 100.0).round() / 100.0
}

pub async fn fetch_gdp(
    client: &reqwest::Client,
    url: &str,
) -> Result<HashMap<String, f64>, PrepareError> {
    let request_error = |source| PrepareError::Request {
        url: url.to_string(),
        source,
    };

    let body = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(request_error)?
        .text()
        .await
        .map_err(request_error)?;

    parse_indicator_response(&body)
}

pub fn flag_urls() -> HashMap<&'static str, String> {
    COUNTRY_CODES
        .iter()
        .map(|(country, code)| (*country, FLAG_URL_TEMPLATE.replace("{}", code)))
        .collect()
}

pub fn top_exports() -> HashMap<&'static str, &'static str> {
    TOP_EXPORTS.into_iter().collect()
}

/// Joins the GDP figures with the flag and export tables. Only countries
/// present in all three sources are kept.
pub fn merge_country_data(gdp: &HashMap<String, f64>) -> Vec<CountryRecord> {
    let flags = flag_urls();
    let exports = top_exports();

    let mut records: Vec<CountryRecord> = gdp
        .iter()
        .filter_map(|(country, amount)| {
            let flag = flags.get(country.as_str())?;
            let export = exports.get(country.as_str())?;
            Some(CountryRecord {
                country: Some(country.clone()),
                gdp: Some(Gdp::Amount(*amount)),
                flag_url: Some(flag.clone()),
                top_export: Some(export.to_string()),
            })
        })
        .collect();
    records.sort_by(|a, b| a.country.cmp(&b.country));
    records
}

pub async fn write_country_data(path: &Path, records: &[CountryRecord]) -> Result<(), PrepareError> {
    let write_error = |source| PrepareError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }
    let json = serde_json::to_string_pretty(records).map_err(PrepareError::Encode)?;
    tokio::fs::write(path, json).await.map_err(write_error)
}

/// Fetches, merges and writes the dataset. Any failure aborts the run.
pub async fn prepare_country_data(source_url: &str, output: &Path) -> Result<usize, PrepareError> {
    let client = reqwest::Client::new();

    tracing::info!("Fetching GDP figures from {source_url}");
    let gdp = fetch_gdp(&client, source_url).await?;
    tracing::debug!("Received GDP figures for {} countries", gdp.len());

    let records = merge_country_data(&gdp);
    write_country_data(output, &records).await?;

    tracing::info!("Data prepared and saved to {}", output.display());
    tracing::info!("Total countries: {}", records.len());
    Ok(records.len())
}
