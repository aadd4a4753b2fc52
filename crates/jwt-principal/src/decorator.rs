//! JWT decorator for generic principals

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::attributes::{attribute_str, HasAttributes};
use crate::claim::ClaimData;
use crate::config::PrincipalConfig;
use crate::principal::{GenericPrincipal, LoginContext, Principal, RoleList};
use crate::sso::SsoPrincipal;
use crate::{Error, Result};

/// Decorator that turns a [`GenericPrincipal`] into token claim data and back
#[derive(Debug, Clone)]
pub struct JwtPrincipalDecorator {
    principal: GenericPrincipal,
}

impl JwtPrincipalDecorator {
    /// Initialize the decorator with the principal to be decorated
    pub fn new(principal: GenericPrincipal) -> Self {
        Self { principal }
    }

    /// Like [`JwtPrincipalDecorator::new`], but refuses a principal without a username
    pub fn try_new(principal: GenericPrincipal) -> Result<Self> {
        if principal.username().trim().is_empty() {
            return Err(Error::InvalidPrincipal("principal has an empty username".to_string()));
        }
        Ok(Self::new(principal))
    }

    /// The decorated principal
    pub fn principal(&self) -> &GenericPrincipal {
        &self.principal
    }

    pub fn into_principal(self) -> GenericPrincipal {
        self.principal
    }

    pub fn username(&self) -> &str {
        self.principal.username()
    }

    pub fn password(&self) -> Option<&str> {
        self.principal.password()
    }

    pub fn roles(&self) -> &RoleList {
        self.principal.roles()
    }

    pub fn user_principal(&self) -> Option<&SsoPrincipal> {
        self.principal.user_principal()
    }

    pub fn login_context(&self) -> Option<&LoginContext> {
        self.principal.login_context()
    }

    /// Flatten the principal into claim data
    pub fn to_claim_data(&self) -> ClaimData {
        self.to_claim_data_with(&PrincipalConfig::default())
    }

    /// Flatten the principal using the configured mail attribute.
    ///
    /// The claim carries mail as a string: a multi-valued attribute yields its
    /// first string entry, any other non-string value is dropped to `None`.
    pub fn to_claim_data_with(&self, config: &PrincipalConfig) -> ClaimData {
        let roles = self.roles().iter().map(str::to_string).collect();

        let mail = self
            .user_principal()
            .and_then(|user| user.attribute(&config.mail_attribute))
            .and_then(attribute_str)
            .map(str::to_string);

        tracing::debug!(
            username = %self.username(),
            has_mail = mail.is_some(),
            "Flattened principal into claim data"
        );

        ClaimData {
            username: self.username().to_string(),
            mail,
            roles,
        }
    }

    /// Restore a decorated principal from claim data.
    ///
    /// Tokens never carry a password, so the restored principal has none.
    pub fn from_claim(claim: ClaimData) -> Self {
        Self::from_claim_with(claim, &PrincipalConfig::default())
    }

    pub fn from_claim_with(claim: ClaimData, config: &PrincipalConfig) -> Self {
        let ClaimData { username, mail, roles } = claim;

        let roles: RoleList = roles.into_iter().collect();

        let mut user_principal = SsoPrincipal::new(username.clone());
        user_principal.merge_attributes([(config.mail_attribute.clone(), mail)]);

        tracing::debug!(username = %username, roles = roles.len(), "Restored principal from claim");

        Self::new(GenericPrincipal::new(username, None, roles, Some(user_principal)))
    }

    /// Restore a decorated principal from a decoded claim object.
    ///
    /// Claims with a missing or blank username fail with `MalformedClaim`,
    /// matching what [`JwtPrincipalDecorator::try_new`] refuses.
    pub fn from_claim_value(value: &Value) -> Result<Self> {
        ClaimData::from_value(value).map(Self::from_claim)
    }

    pub fn from_claim_json(json: &str) -> Result<Self> {
        ClaimData::from_json(json).map(Self::from_claim)
    }
}

impl Principal for JwtPrincipalDecorator {
    fn name(&self) -> &str {
        self.principal.name()
    }

    fn equals(&self, another: &dyn Principal) -> bool {
        self.principal.equals(another)
    }
}

impl PartialEq for JwtPrincipalDecorator {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for JwtPrincipalDecorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.principal, f)
    }
}

impl HasAttributes for JwtPrincipalDecorator {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.principal.attribute(name)
    }

    // Accessor names go to the decorated principal as they are.
    fn call(&self, accessor: &str) -> Option<&Value> {
        self.principal.call(accessor)
    }
}

impl Serialize for JwtPrincipalDecorator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_claim_data().serialize(serializer)
    }
}
