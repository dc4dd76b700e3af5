use crate::utils::file::{read_file_to_string, FileError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

const EMBEDDED_DATASET: &str = include_str!("../../assets/locations.json");

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Invalid dataset: {0}")]
    Invalid(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("File error: {0}")]
    FileError(#[from] FileError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetState {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetCountry {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub states: Vec<DatasetState>,
}

/// The raw geographic table. Array order is the order every lookup preserves.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub countries: Vec<DatasetCountry>,
}

impl Dataset {
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub async fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = read_file_to_string(path).await?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<(), DatasetError> {
        let mut country_codes = HashSet::new();

        for country in &self.countries {
            if country.code.is_empty() {
                return Err(DatasetError::Invalid(format!(
                    "country '{}' has an empty code",
                    country.name
                )));
            }
            if !country_codes.insert(country.code.as_str()) {
                return Err(DatasetError::Invalid(format!(
                    "duplicate country code {}",
                    country.code
                )));
            }

            let mut state_codes = HashSet::new();
            for state in &country.states {
                if state.code.is_empty() {
                    return Err(DatasetError::Invalid(format!(
                        "state '{}' of {} has an empty code",
                        state.name, country.code
                    )));
                }
                if !state_codes.insert(state.code.as_str()) {
                    return Err(DatasetError::Invalid(format!(
                        "duplicate state code {} in {}",
                        state.code, country.code
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads() {
        let dataset = Dataset::embedded().unwrap();
        let codes: Vec<&str> = dataset.countries.iter().map(|c| c.code.as_str()).collect();
        for code in ["IN", "CA", "AU", "SG", "GB", "US"] {
            assert!(codes.contains(&code), "missing {}", code);
        }
    }

    #[test]
    fn missing_states_and_cities_default_to_empty() {
        let dataset = Dataset::from_json(
            r#"{"countries":[{"code":"XX","name":"Nowhere"},
                {"code":"YY","name":"Elsewhere","states":[{"code":"A","name":"Alpha"}]}]}"#,
        )
        .unwrap();
        assert!(dataset.countries[0].states.is_empty());
        assert!(dataset.countries[1].states[0].cities.is_empty());
    }

    #[test]
    fn rejects_duplicate_country_codes() {
        let result = Dataset::from_json(
            r#"{"countries":[{"code":"XX","name":"One"},{"code":"XX","name":"Two"}]}"#,
        );
        assert!(matches!(result, Err(DatasetError::Invalid(_))));
    }

    #[test]
    fn rejects_duplicate_state_codes_within_a_country() {
        let result = Dataset::from_json(
            r#"{"countries":[{"code":"XX","name":"One","states":[
                {"code":"A","name":"Alpha"},{"code":"A","name":"Again"}]}]}"#,
        );
        assert!(matches!(result, Err(DatasetError::Invalid(_))));
    }

    #[test]
    fn same_state_code_in_different_countries_is_allowed() {
        let dataset = Dataset::from_json(
            r#"{"countries":[
                {"code":"XX","name":"One","states":[{"code":"A","name":"Alpha"}]},
                {"code":"YY","name":"Two","states":[{"code":"A","name":"Alpha"}]}]}"#,
        );
        assert!(dataset.is_ok());
    }

    #[test]
    fn rejects_empty_country_code() {
        let result = Dataset::from_json(r#"{"countries":[{"code":"","name":"Blank"}]}"#);
        assert!(matches!(result, Err(DatasetError::Invalid(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = Dataset::from_json(r#"{"countries": ["#);
        assert!(matches!(result, Err(DatasetError::JsonError(_))));
    }

    #[tokio::test]
    async fn loads_dataset_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.json");
        std::fs::write(
            &path,
            r#"{"countries":[{"code":"XX","name":"Nowhere","states":[
                {"code":"A","name":"Alpha","cities":["One","Two"]}]}]}"#,
        )
        .unwrap();

        let dataset = Dataset::from_file(&path).await.unwrap();
        assert_eq!(dataset.countries[0].states[0].cities.len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Dataset::from_file(&dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(DatasetError::FileError(_))));
    }
}
