//! Base principal types the decorator and the SSO principal are built on
//!
//! These are the parts of the surrounding security framework this crate
//! needs: a named principal, an ordered role list, an opaque login context
//! and the generic principal that ties them together.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attributes::HasAttributes;
use crate::sso::SsoPrincipal;

/// An authenticated entity identified by its name
pub trait Principal: fmt::Display + Send + Sync {
    /// The principal's name
    fn name(&self) -> &str;

    /// Compare this principal's name against another principal
    fn equals(&self, another: &dyn Principal) -> bool {
        self.name() == another.name()
    }
}

/// Principal that carries nothing but its name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimplePrincipal {
    name: String,
}

impl SimplePrincipal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Principal for SimplePrincipal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SimplePrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered list of role names
///
/// Order is significant (some deployments treat it as precedence) and
/// duplicates are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleList(Vec<String>);

impl RoleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a role at the end of the list
    pub fn add(&mut self, role: impl Into<String>) {
        self.0.push(role.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.iter().any(|r| r == role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Role names in list order
    pub fn to_strings(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for RoleList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a RoleList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Opaque handle to the login context that authenticated a principal
///
/// Passed through unchanged; the owner can get its own type back with
/// [`LoginContext::downcast_ref`].
#[derive(Clone)]
pub struct LoginContext(Arc<dyn Any + Send + Sync>);

impl LoginContext {
    pub fn new<T: Any + Send + Sync>(inner: T) -> Self {
        Self(Arc::new(inner))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Whether both handles point at the same context
    pub fn same_as(&self, other: &LoginContext) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LoginContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoginContext(..)")
    }
}

/// Principal produced by a successful login
#[derive(Debug, Clone)]
pub struct GenericPrincipal {
    name: String,
    username: String,
    password: Option<String>,
    roles: RoleList,
    user_principal: Option<SsoPrincipal>,
    login_context: Option<LoginContext>,
}

impl GenericPrincipal {
    /// Create a principal named after `username`
    pub fn new(
        username: impl Into<String>,
        password: Option<String>,
        roles: RoleList,
        user_principal: Option<SsoPrincipal>,
    ) -> Self {
        let username = username.into();
        Self {
            name: username.clone(),
            username,
            password,
            roles,
            user_principal,
            login_context: None,
        }
    }

    pub fn with_login_context(mut self, login_context: LoginContext) -> Self {
        self.login_context = Some(login_context);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn roles(&self) -> &RoleList {
        &self.roles
    }

    /// The principal handed out to the application as the request's user
    pub fn user_principal(&self) -> Option<&SsoPrincipal> {
        self.user_principal.as_ref()
    }

    pub fn login_context(&self) -> Option<&LoginContext> {
        self.login_context.as_ref()
    }
}

impl Principal for GenericPrincipal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for GenericPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Extended attributes live on the user principal.
impl HasAttributes for GenericPrincipal {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.user_principal.as_ref()?.attribute(name)
    }
}
