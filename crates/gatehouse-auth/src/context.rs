//! Per-request authorization context derived from validated claims.

use serde::Serialize;

use gatehouse_core::{first_non_empty, or_default};
use gatehouse_models::{Role, Timezone};

use crate::claims::JwtClaims;

/// Issuer tag that marks a ghost login, compared case-insensitively.
pub const GHOST_TAG: &str = "ghost";

const ISSUER_SEPARATOR: char = '|';

/// Who is acting, with what role, possibly on behalf of whom, in what timezone.
///
/// Built once per validated token. The setters let the request layer apply
/// overrides such as a header-declared timezone; each request owns its own
/// instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorizationContext {
    user_id: String,
    role: Role,
    is_ghost: bool,
    ghost_id: String,
    timezone: Timezone,
}

/// Values used when the claims leave a field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextDefaults {
    pub user_id: String,
    pub role: Role,
}

impl AuthorizationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The acting user. For ghost logins this is the impersonated user.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_ghost(&self) -> bool {
        self.is_ghost
    }

    /// The operator behind a ghost login, empty otherwise.
    pub fn ghost_id(&self) -> &str {
        &self.ghost_id
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) -> &mut Self {
        self.user_id = user_id.into();
        self
    }

    pub fn set_role(&mut self, role: Role) -> &mut Self {
        self.role = role;
        self
    }

    pub fn set_timezone(&mut self, timezone: Timezone) -> &mut Self {
        self.timezone = timezone;
        self
    }
}

/// Returns the operator ID if `issuer` is `ghost|<id>`.
///
/// Exactly two `|`-separated segments are required.
pub fn parse_ghost_issuer(issuer: &str) -> Option<&str> {
    let mut segments = issuer.split(ISSUER_SEPARATOR);
    match (segments.next(), segments.next(), segments.next()) {
        (Some(tag), Some(ghost_id), None) if tag.eq_ignore_ascii_case(GHOST_TAG) => Some(ghost_id),
        _ => None,
    }
}

/// Builds the context from validated claims with empty defaults.
///
/// See [`extract_context_with`].
pub fn extract_context(claims: &JwtClaims) -> AuthorizationContext {
    extract_context_with(claims, &ContextDefaults::default())
}

/// Builds the context from validated claims.
///
/// - `user_id` is `jti`, or `defaults.user_id` when `jti` is empty
/// - `role` is the role named by `aud`; an empty or unrecognized audience
///   falls back to `defaults.role`
/// - an issuer of the form `ghost|<id>` marks a ghost login with `<id>` as
///   the operator; `user_id` stays the impersonated user
/// - `timezone` starts unset; the request layer fills it in
pub fn extract_context_with(claims: &JwtClaims, defaults: &ContextDefaults) -> AuthorizationContext {
    let ghost_id = parse_ghost_issuer(&claims.issuer);

    AuthorizationContext {
        user_id: first_non_empty(&[claims.id.as_str(), defaults.user_id.as_str()]).to_string(),
        role: or_default(Role::from_claim(&claims.audience), defaults.role),
        is_ghost: ghost_id.is_some(),
        ghost_id: ghost_id.unwrap_or_default().to_string(),
        timezone: Timezone::Unset,
    }
}
