use serde::Deserialize;
use service_core::error::AppError;
use std::collections::HashMap;
use std::path::Path;

/// Immutable mapping from city key to an ordered list of café names.
///
/// City keys are case-sensitive. The per-city order is fixed for the
/// lifetime of the process: the handler truncates by taking a prefix, so
/// reordering here would change response bodies.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CafeDirectory {
    cities: HashMap<String, Vec<String>>,
}

impl CafeDirectory {
    /// The compiled-in directory, used when no directory file is configured.
    pub fn builtin() -> Self {
        let mut cities = HashMap::new();
        cities.insert(
            "moscow".to_string(),
            vec![
                "Мир кофе".to_string(),
                "Сладкоежка".to_string(),
                "Кофе и завтраки".to_string(),
                "Сытый студент".to_string(),
            ],
        );
        Self { cities }
    }

    /// Load a directory from a JSON file of the form
    /// `{"moscow": ["name", ...], ...}`. Any problem with the file is a
    /// startup error; requests never observe a half-loaded directory.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "failed to read directory file {}: {}",
                path.display(),
                e
            ))
        })?;
        let directory: Self = serde_json::from_str(&raw).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "directory file {} is not valid JSON: {}",
                path.display(),
                e
            ))
        })?;

        if directory.cities.is_empty() {
            tracing::warn!(path = %path.display(), "directory file contains no cities");
        }

        Ok(directory)
    }

    /// Ordered café names for a city, `None` when the city is unknown.
    pub fn cafes(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_moscow_in_fixed_order() {
        let directory = CafeDirectory::builtin();
        let cafes = directory.cafes("moscow").expect("moscow should be present");
        assert_eq!(cafes.len(), 4);
        assert_eq!(cafes[0], "Мир кофе");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let directory = CafeDirectory::builtin();
        assert!(directory.cafes("Moscow").is_none());
        assert!(directory.cafes("london").is_none());
    }

    #[test]
    fn parses_directory_json() {
        let directory: CafeDirectory =
            serde_json::from_str(r#"{"prague": ["U Zlatého lva", "Kavárna Slavia"]}"#)
                .expect("valid directory JSON");
        assert_eq!(directory.city_count(), 1);
        assert_eq!(
            directory.cafes("prague").unwrap(),
            ["U Zlatého lva", "Kavárna Slavia"]
        );
    }
}
