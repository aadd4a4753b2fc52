//! # JWT-Principal
//!
//! Principal types for single-sign-on with JWT.
//!
//! This crate provides:
//! - `SsoPrincipal`, a principal extended with directory attributes (`mail`, `cn`, ...)
//! - `JwtPrincipalDecorator`, a decorator that flattens a generic principal into
//!   token claim data and restores it from a decoded claim
//! - Name based attribute lookup (`getMail`, `isMail`, `hasMail`)
//!
//! ## Architecture
//!
//! Signing and verifying tokens is left to the token library. This crate only
//! converts between authenticated principals and the plain claim structure
//! `{"username", "mail", "roles"}` carried inside the token.

pub mod error;
pub mod principal;
pub mod attributes;
pub mod sso;
pub mod claim;
pub mod decorator;
pub mod config;

pub use error::{Error, Result};
pub use principal::{Principal, SimplePrincipal, GenericPrincipal, RoleList, LoginContext};
pub use attributes::{Attributes, HasAttributes, DirectoryAttributes, normalize_accessor};
pub use sso::SsoPrincipal;
pub use claim::ClaimData;
pub use decorator::JwtPrincipalDecorator;
pub use crate::config::PrincipalConfig;
