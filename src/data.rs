use std::path::Path;

use serde_json::Value;

use crate::models::country::{CountryData, country_entry};

/// Parses the dataset file contents. Only the outer array is required; each
/// entry is read on its own and entries without a `country` name are skipped.
pub fn parse_country_data(text: &str) -> Result<CountryData, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_str(text)?;
    Ok(records.iter().filter_map(country_entry).collect())
}

/// Reads the dataset from disk. Failures are logged and yield an empty
/// dataset so the service keeps answering.
pub async fn load_country_data(path: &Path) -> CountryData {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Error loading data file {}: {e}", path.display());
            return CountryData::new();
        }
    };

    match parse_country_data(&text) {
        Ok(data) => {
            tracing::debug!("Loaded {} countries from {}", data.len(), path.display());
            data
        }
        Err(e) => {
            tracing::error!("Error parsing data file {}: {e}", path.display());
            CountryData::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::country::Gdp;

    const SAMPLE: &str = r#"[
        {"country": "France", "GDP": 2780000000000, "flag_url": "fr.png", "top_export": "Aircraft"},
        {"country": "Tuvalu", "GDP": "N/A"},
        {"GDP": 1000},
        {"country": "Japan", "GDP": 4230000000000.5, "flag_url": "jp.png", "top_export": "Vehicles"}
    ]"#;

    #[test]
    fn parses_records_in_file_order() {
        let data = parse_country_data(SAMPLE).unwrap();

        let names: Vec<_> = data.keys().map(String::as_str).collect();
        assert_eq!(names, ["France", "Tuvalu", "Japan"]);
        assert_eq!(data["France"].gdp, Gdp::Amount(2.78e12));
        assert_eq!(data["Japan"].flag, "jp.png");
        assert_eq!(data["Tuvalu"].flag, "");
        assert_eq!(data["Tuvalu"].top_export, "N/A");
    }

    #[test]
    fn odd_records_do_not_spoil_the_file() {
        let text = r#"[
            {"country": "France", "GDP": 2780000000000, "flag_url": "fr.png", "top_export": "Aircraft"},
            {"country": "Japan", "GDP": 4230000000000, "flag_url": "jp.png", "top_export": "Vehicles"},
            {"country": "Oddland", "GDP": 1000, "flag_url": null, "top_export": 7},
            {"country": "Peru", "GDP": true},
            "not a record",
            42
        ]"#;

        let data = parse_country_data(text).unwrap();

        let names: Vec<_> = data.keys().map(String::as_str).collect();
        assert_eq!(names, ["France", "Japan", "Oddland", "Peru"]);
        assert_eq!(data["Oddland"].gdp, Gdp::Amount(1000.0));
        assert_eq!(data["Oddland"].top_export, "N/A");
        assert_eq!(data["Peru"].gdp, Gdp::Label("N/A".into()));
    }

    #[test]
    fn rejects_non_array_documents() {
        assert!(parse_country_data(r#"{"France": {}}"#).is_err());
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let data = load_country_data(file.path()).await;
        assert_eq!(data.len(), 3);
    }

    #[tokio::test]
    async fn missing_file_gives_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_country_data(&dir.path().join("absent.json")).await;
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_gives_empty_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"country\": ").unwrap();

        assert!(load_country_data(file.path()).await.is_empty());
    }
}
