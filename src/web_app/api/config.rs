// web_app/api/config.rs - Sheet loader configuration
//
// The sheet identifier is an explicit value rather than a literal buried in
// the loader, so the loader can be pointed at any published sheet (or a
// local test server) without code changes.

use serde::{Deserialize, Serialize};
use std::env;

/// Sheet the gallery shows when `SHEET_ID` is not set
pub const DEFAULT_SHEET_ID: &str = "19XzkckdgYhbZpRKBT5IJFg4m0Tb_3zqQvCbvuO_lhGo";

/// Google Sheets CSV export endpoint; `{sheet_id}` is substituted
pub const EXPORT_URL_TEMPLATE: &str =
    "https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv";

/// Environment variable naming the sheet
pub const SHEET_ID_ENV: &str = "SHEET_ID";

/// Environment variable overriding the export URL template
pub const EXPORT_URL_ENV: &str = "SHEET_EXPORT_URL";

const SHEET_ID_PLACEHOLDER: &str = "{sheet_id}";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Opaque identifier of the published sheet. Not validated.
    pub sheet_id: String,
    /// URL template containing `{sheet_id}`
    pub export_url_template: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_ID)
    }
}

impl SheetConfig {
    pub fn new(sheet_id: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            export_url_template: EXPORT_URL_TEMPLATE.to_string(),
        }
    }

    /// Replace the export URL template (must contain `{sheet_id}` to use the id)
    pub fn with_export_url_template(mut self, template: impl Into<String>) -> Self {
        self.export_url_template = template.into();
        self
    }

    /// The CSV export URL for this sheet
    pub fn export_url(&self) -> String {
        self.export_url_template
            .replace(SHEET_ID_PLACEHOLDER, &self.sheet_id)
    }

    /// Build the configuration from `.env` and the process environment
    ///
    /// Reads `SHEET_ID` and `SHEET_EXPORT_URL`, falling back to the defaults
    /// when they are unset or blank.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = match non_blank(SHEET_ID_ENV) {
            Some(id) => Self::new(id.trim()),
            None => Self::default(),
        };
        if let Some(template) = non_blank(EXPORT_URL_ENV) {
            config = config.with_export_url_template(template.trim());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_export_url_from_sheet_id() {
        let config = SheetConfig::new("abc123");
        assert_eq!(
            config.export_url(),
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv"
        );
    }

    #[test]
    fn test_default_uses_gallery_sheet() {
        let config = SheetConfig::default();
        assert_eq!(config.sheet_id, DEFAULT_SHEET_ID);
        assert!(config.export_url().contains(DEFAULT_SHEET_ID));
        assert!(config.export_url().ends_with("/export?format=csv"));
    }

    #[test]
    fn test_custom_template() {
        let config = SheetConfig::new("s1")
            .with_export_url_template("http://127.0.0.1:8080/sheets/{sheet_id}.csv");
        assert_eq!(config.export_url(), "http://127.0.0.1:8080/sheets/s1.csv");
    }

    #[test]
    fn test_sheet_id_is_not_validated() {
        let config = SheetConfig::new("");
        assert_eq!(
            config.export_url(),
            "https://docs.google.com/spreadsheets/d//export?format=csv"
        );
    }

    #[test]
    fn test_from_lookup_reads_both_keys() {
        let vars: HashMap<&str, &str> = [
            (SHEET_ID_ENV, " my-sheet "),
            (EXPORT_URL_ENV, "http://mirror.local/{sheet_id}"),
        ]
        .into_iter()
        .collect();

        let config = SheetConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.sheet_id, "my-sheet");
        assert_eq!(config.export_url(), "http://mirror.local/my-sheet");
    }

    #[test]
    fn test_from_lookup_blank_values_fall_back() {
        let config = SheetConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, SheetConfig::default());

        let config = SheetConfig::from_lookup(|_| None);
        assert_eq!(config, SheetConfig::default());
    }
}
