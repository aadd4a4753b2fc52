//! SSO principal carrying extended directory attributes

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::attributes::{Attributes, HasAttributes};
use crate::principal::{Principal, SimplePrincipal};

/// A simple principal extended with attributes such as the LDAP `mail`
#[derive(Debug, Clone, PartialEq)]
pub struct SsoPrincipal {
    principal: SimplePrincipal,
    attributes: Attributes,
}

impl SsoPrincipal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            principal: SimplePrincipal::new(name),
            attributes: Attributes::new(),
        }
    }

    /// Create a principal with an initial set of attributes
    pub fn with_attributes<I, K, V>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut principal = Self::new(name);
        principal.merge_attributes(attributes);
        principal
    }

    /// Merge extended attributes into the ones already present
    pub fn merge_attributes<I, K, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let before = self.attributes.len();
        self.attributes.merge(attributes);
        tracing::trace!(
            principal = %self.principal,
            added = self.attributes.len() - before,
            total = self.attributes.len(),
            "Merged principal attributes"
        );
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Copy of the attribute mapping; the `Serialize` impl emits the same map
    pub fn to_map(&self) -> HashMap<String, Value> {
        self.attributes.to_map()
    }
}

impl Principal for SsoPrincipal {
    fn name(&self) -> &str {
        self.principal.name()
    }
}

impl fmt::Display for SsoPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.principal, f)
    }
}

impl HasAttributes for SsoPrincipal {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

// Serializes to the bare attribute mapping.
impl Serialize for SsoPrincipal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}
