//! Format-aware loading of JSON and TOML documents.

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde_json::Value;

use crate::{AdminError, AdminResult};

/// Parse `data` according to the extension of `path`.
///
/// Files ending in `.json` are parsed as JSON; anything else is treated as
/// TOML.
///
/// # Errors
///
/// Returns [`AdminError::Document`] when the contents fail to parse.
pub fn parse_document(path: &Utf8Path, data: &str) -> AdminResult<Value> {
    let ext = path.extension().map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => serde_json::from_str(data).map_err(|e| AdminError::document(path, e)),
        _ => Figment::from(Toml::string(data))
            .extract()
            .map_err(|e| AdminError::document(path, e)),
    }
}

/// Read and parse the document at `path`.
///
/// # Errors
///
/// Returns [`AdminError::Document`] when the file cannot be read or parsed.
pub fn load_document(path: &Utf8Path) -> AdminResult<Value> {
    let data = std::fs::read_to_string(path).map_err(|e| AdminError::document(path, e))?;
    parse_document(path, &data)
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use serde_json::json;

    use super::parse_document;
    use crate::AdminError;

    #[test]
    fn parses_json_by_extension() {
        let value = parse_document(Utf8Path::new("a.JSON"), r#"{"a": [1]}"#).expect("json parses");
        assert_eq!(value, json!({"a": [1]}));
    }

    #[test]
    fn parses_toml_tables() {
        let value =
            parse_document(Utf8Path::new("hooks.toml"), "[a]\nb = 1\n").expect("toml parses");
        assert_eq!(value, json!({"a": {"b": 1}}));
    }

    #[test]
    fn reports_the_failing_path() {
        let err = parse_document(Utf8Path::new("broken.json"), "{").expect_err("invalid json");
        assert!(matches!(&err, AdminError::Document { path, .. } if path == "broken.json"));
    }
}
