//! Options-object construction
//!
//! `UserOptions` bundles the optional fields of a record, each with its own
//! default: age and address default to absent, phone to the `"default"`
//! placeholder. Omitting the whole bundle is the same as passing
//! `UserOptions::default()`.

use crate::error::{Error, Result};
use crate::types::{Phone, User};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, trace};

/// Named optional fields for [`User::from_options`]
///
/// Deserializes from a partial mapping; keys left out take their default
/// and unrecognized keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserOptions {
    /// Age, absent unless given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Phone, the `"default"` placeholder unless given; `null` counts as not given
    #[serde(deserialize_with = "null_as_placeholder")]
    pub phone: Phone,

    /// Address, absent unless given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

fn null_as_placeholder<'de, D>(deserializer: D) -> std::result::Result<Phone, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Phone>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserOptions {
    /// Parse options from a JSON mapping
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse options from a YAML mapping
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Load options from a file; `.yaml`/`.yml` files are read as YAML,
    /// anything else as JSON
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading user options");
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let is_yaml = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s == "yaml" || s == "yml")
            .unwrap_or(false);

        if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }
}

impl User {
    /// Construct a record in one call from a name and an optional bundle of
    /// named fields.
    ///
    /// ```
    /// use profile_core::{Phone, User, UserOptions};
    ///
    /// let tom = User::from_options("Tom", Some(UserOptions { age: Some(22), ..Default::default() }));
    /// assert_eq!(tom.phone(), Some(&Phone::placeholder()));
    ///
    /// let plain = User::from_options("Sam", None);
    /// assert_eq!(plain.age(), None);
    /// ```
    pub fn from_options(name: impl Into<String>, options: Option<UserOptions>) -> Self {
        let UserOptions { age, phone, address } = options.unwrap_or_default();
        let user = User::from_parts(name, age, Some(phone), address);
        trace!(user = %user, "Constructed user from options");
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_options() {
        let options = UserOptions::default();
        assert_eq!(options.age, None);
        assert_eq!(options.phone, Phone::placeholder());
        assert_eq!(options.address, None);
    }

    #[test]
    fn test_from_options_without_mapping() {
        let user = User::from_options("Sam", None);
        assert_eq!(user.name(), "Sam");
        assert_eq!(user.age(), None);
        assert_eq!(user.phone(), Some(&Phone::Text("default".to_string())));
        assert_eq!(user.address(), None);
    }

    #[test]
    fn test_omitted_mapping_equals_empty_mapping() {
        assert_eq!(
            User::from_options("Sam", None),
            User::from_options("Sam", Some(UserOptions::default()))
        );
    }

    #[test]
    fn test_explicit_phone_replaces_placeholder() {
        let user = User::from_options(
            "Kim",
            Some(UserOptions {
                phone: Phone::Number(5550100),
                ..Default::default()
            }),
        );
        assert_eq!(user.phone(), Some(&Phone::Number(5550100)));
    }

    #[test]
    fn test_from_json_str_partial() {
        let options = UserOptions::from_json_str(r#"{"age": 22}"#).unwrap();
        assert_eq!(options.age, Some(22));
        assert!(options.phone.is_placeholder());
        assert_eq!(options.address, None);
    }

    #[test]
    fn test_from_json_str_empty_and_unknown_keys() {
        assert_eq!(UserOptions::from_json_str("{}").unwrap(), UserOptions::default());

        let options = UserOptions::from_json_str(r#"{"nickname": "T", "address": "456 Beck Street"}"#).unwrap();
        assert_eq!(options.address.as_deref(), Some("456 Beck Street"));
    }

    #[test]
    fn test_from_json_str_numeric_and_text_phone() {
        let numeric = UserOptions::from_json_str(r#"{"phone": 111222333}"#).unwrap();
        assert_eq!(numeric.phone, Phone::Number(111222333));

        let text = UserOptions::from_json_str(r#"{"phone": "555-0100"}"#).unwrap();
        assert_eq!(text.phone, Phone::Text("555-0100".to_string()));
    }

    #[test]
    fn test_null_phone_falls_back_to_placeholder() {
        let options = UserOptions::from_json_str(r#"{"age": null, "phone": null}"#).unwrap();
        assert_eq!(options, UserOptions::default());

        let options = UserOptions::from_yaml_str("phone: ~\naddress: 9 Quay Lane\n").unwrap();
        assert!(options.phone.is_placeholder());
        assert_eq!(options.address.as_deref(), Some("9 Quay Lane"));
    }

    #[test]
    fn test_negative_phone_kept_as_text() {
        let options = UserOptions::from_json_str(r#"{"phone": -5}"#).unwrap();
        assert_eq!(options.phone, Phone::Text("-5".to_string()));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = UserOptions::from_json_str("{ age: }").unwrap_err();
        assert!(matches!(err, Error::Json { .. }));

        let err = UserOptions::from_json_str(r#"{"age": "old"}"#).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_from_yaml_str() {
        let options = UserOptions::from_yaml_str("age: 40\naddress: 12 Harbour Row\n").unwrap();
        assert_eq!(options.age, Some(40));
        assert_eq!(options.address.as_deref(), Some("12 Harbour Row"));
        assert!(options.phone.is_placeholder());

        let err = UserOptions::from_yaml_str("age: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Yaml { .. }));
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("tom.json");
        std::fs::write(&json_path, r#"{"age": 22}"#).unwrap();
        assert_eq!(UserOptions::from_path(&json_path).unwrap().age, Some(22));

        let yaml_path = dir.path().join("steve.yml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        writeln!(file, "address: 456 Beck Street").unwrap();
        assert_eq!(
            UserOptions::from_path(&yaml_path).unwrap().address.as_deref(),
            Some("456 Beck Street")
        );
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = UserOptions::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
