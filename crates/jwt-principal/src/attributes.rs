//! Extended (directory) attributes and name based attribute lookup

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Accessor prefixes stripped by [`normalize_accessor`]
const ACCESSOR_PREFIXES: [&str; 3] = ["get", "has", "is"];

/// Turn an accessor name into the attribute key it reads.
///
/// `getMail`, `isMail`, `hasMail`, `get_mail` and plain `mail` all map to
/// `mail`. Returns `None` for an empty name or a bare prefix.
pub fn normalize_accessor(accessor: &str) -> Option<String> {
    let lower = accessor.to_lowercase();
    let rest = ACCESSOR_PREFIXES
        .iter()
        .find_map(|prefix| lower.strip_prefix(prefix))
        .map(|rest| rest.trim_start_matches('_'))
        .unwrap_or(lower.as_str());

    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

/// Something that exposes extended attributes by name
pub trait HasAttributes {
    /// The attribute stored under `name`, `None` if it isn't set
    fn attribute(&self, name: &str) -> Option<&Value>;

    /// Resolve an accessor name such as `getMail` to its attribute
    fn call(&self, accessor: &str) -> Option<&Value> {
        let name = normalize_accessor(accessor)?;
        self.attribute(&name)
    }
}

/// String form of an attribute value.
///
/// Multi-valued directory attributes yield their first string entry.
pub fn attribute_str(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Array(values) => values.iter().find_map(Value::as_str),
        _ => None,
    }
}

macro_rules! directory_attributes {
    ($($(#[$meta:meta])* $method:ident => $key:literal),* $(,)?) => {
        /// Typed accessors for well known directory attributes
        pub trait DirectoryAttributes: HasAttributes {
            $(
                $(#[$meta])*
                fn $method(&self) -> Option<&str> {
                    self.attribute($key).and_then(attribute_str)
                }
            )*
        }

        impl<T: HasAttributes + ?Sized> DirectoryAttributes for T {}
    };
}

directory_attributes! {
    /// `mail`
    mail => "mail",
    uid => "uid",
    /// `cn`
    common_name => "cn",
    /// `sn`
    surname => "sn",
    given_name => "givenname",
    display_name => "displayname",
}

/// Attribute name to value mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(HashMap<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `attributes` into this set; existing keys not in `attributes` are kept
    pub fn merge<I, K, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in attributes {
            self.0.insert(name.into(), value.into());
        }
    }

    /// Stored value for `name`; a stored `null` counts as not set
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of the raw mapping, including keys stored as `null`
    pub fn to_map(&self) -> HashMap<String, Value> {
        self.0.clone()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        attributes.merge(iter);
        attributes
    }
}

impl HasAttributes for Attributes {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_accessor_prefixes() {
        assert_eq!(normalize_accessor("getMail").as_deref(), Some("mail"));
        assert_eq!(normalize_accessor("isMail").as_deref(), Some("mail"));
        assert_eq!(normalize_accessor("hasMail").as_deref(), Some("mail"));
        assert_eq!(normalize_accessor("GETMAIL").as_deref(), Some("mail"));
        assert_eq!(normalize_accessor("get_mail").as_deref(), Some("mail"));
        assert_eq!(normalize_accessor("getDisplayName").as_deref(), Some("displayname"));
    }

    #[test]
    fn test_normalize_accessor_without_prefix() {
        assert_eq!(normalize_accessor("mail").as_deref(), Some("mail"));
        assert_eq!(normalize_accessor("DisplayName").as_deref(), Some("displayname"));
    }

    #[test]
    fn test_normalize_accessor_rejects_empty_names() {
        assert!(normalize_accessor("get").is_none());
        assert!(normalize_accessor("HAS").is_none());
        assert!(normalize_accessor("is_").is_none());
        assert!(normalize_accessor("").is_none());
    }

    #[test]
    fn test_merge_is_additive() {
        let mut attributes: Attributes = [("a", json!(1)), ("b", json!(2))].into_iter().collect();
        attributes.merge([("b", json!(3)), ("c", json!(4))]);

        let expected: HashMap<String, Value> = [
            ("a".to_string(), json!(1)),
            ("b".to_string(), json!(3)),
            ("c".to_string(), json!(4)),
        ]
        .into_iter()
        .collect();
        assert_eq!(attributes.to_map(), expected);
    }

    #[test]
    fn test_null_value_is_not_set() {
        let mut attributes = Attributes::new();
        attributes.merge([("mail", Value::Null)]);

        assert!(attributes.get("mail").is_none());
        assert!(!attributes.contains("mail"));
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.to_map().get("mail"), Some(&Value::Null));
    }

    #[test]
    fn test_directory_accessors() {
        let attributes: Attributes = [
            ("mail", json!(["alice@example.com", "a.smith@example.com"])),
            ("cn", json!("Alice Smith")),
            ("uid", json!(1001)),
        ]
        .into_iter()
        .collect();

        assert_eq!(attributes.mail(), Some("alice@example.com"));
        assert_eq!(attributes.common_name(), Some("Alice Smith"));
        assert_eq!(attributes.uid(), None);
        assert_eq!(attributes.surname(), None);
    }

    #[test]
    fn test_call_resolves_through_normalization() {
        let attributes: Attributes = [("mail", json!("alice@example.com"))].into_iter().collect();

        assert_eq!(attributes.call("getMail"), attributes.attribute("mail"));
        assert_eq!(attributes.call("isMail"), attributes.attribute("mail"));
        assert_eq!(attributes.call("hasMail"), attributes.attribute("mail"));
        assert!(attributes.call("getPhone").is_none());
        assert_eq!(attributes.call("mail"), Some(&json!("alice@example.com")));
        assert_eq!(attributes.call("Mail"), attributes.attribute("mail"));
    }
}
