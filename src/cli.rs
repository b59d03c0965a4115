//! Commands behind the `gatehouse` binary.
//!
//! The binary only parses arguments and prints; everything it reports is
//! produced here so the same output can be checked without a process.

use std::path::Path;

use anyhow::Context;
use serde_json::{Value, json};
use tracing::warn;

use gatehouse_auth::{AuthorizationContext, extract_context, validate_token, verify_session_issuer};
use gatehouse_config::JwtConfig;
use gatehouse_core::AuthError;
use gatehouse_models::CasbinResource;
use gatehouse_policy::{MemoryPolicyStore, list_resources, resolve_all};

/// Process exit code for a token that was read but rejected.
pub const REJECTED_TOKEN_EXIT_CODE: u8 = 2;

/// Loads the policy file at `path` and resolves `roles`, or every subject
/// in the file when `roles` is empty.
///
/// Roles that resolve to no groups are logged at `warn`.
///
/// # Errors
///
/// Fails if the file cannot be read or contains a malformed line.
pub fn resources(path: &Path, roles: &[String]) -> anyhow::Result<Vec<CasbinResource>> {
    let store = MemoryPolicyStore::from_path(path)
        .with_context(|| format!("Failed to load policy from {}", path.display()))?;

    let resources = if roles.is_empty() {
        resolve_all(&store)
    } else {
        list_resources(&store, roles)
    };

    for resource in resources.iter().filter(|r| r.is_empty()) {
        warn!(role = %resource.role, team = %resource.team, "Role has no resources");
    }

    Ok(resources)
}

/// Validates `token` and derives its context.
///
/// With `expected_issuer`, the token must also carry that issuer or a
/// ghost issuer.
pub fn inspect_token(
    token: &str,
    expected_issuer: Option<&str>,
    jwt_config: &JwtConfig,
) -> Result<AuthorizationContext, AuthError> {
    let claims = validate_token(token, jwt_config)?;
    if let Some(expected) = expected_issuer {
        verify_session_issuer(&claims, expected)?;
    }
    Ok(extract_context(&claims))
}

/// One-line description of a session, e.g. `Staff session for u1`.
pub fn session_summary(ctx: &AuthorizationContext) -> String {
    let role = match ctx.role().display_name() {
        "" => "Unassigned",
        name => name,
    };

    if ctx.is_ghost() {
        format!(
            "{} session for {} (ghost login by {})",
            role,
            ctx.user_id(),
            ctx.ghost_id()
        )
    } else {
        format!("{} session for {}", role, ctx.user_id())
    }
}

/// JSON body printed for a rejected token.
pub fn rejection_body(err: AuthError) -> Value {
    json!({
        "error": err.to_string(),
        "code": err.code(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_auth::JwtClaims;

    fn claims(id: &str, audience: &str, issuer: &str) -> JwtClaims {
        JwtClaims {
            id: id.to_string(),
            audience: audience.to_string(),
            issuer: issuer.to_string(),
            subject: id.to_string(),
            exp: 9999999999,
            iat: None,
            nbf: None,
        }
    }

    #[test]
    fn test_session_summary() {
        let ctx = extract_context(&claims("u1", "super_admin", "i1"));
        assert_eq!(session_summary(&ctx), "Super Admin session for u1");

        let ctx = extract_context(&claims("u1", "client", "ghost|op-3"));
        assert_eq!(
            session_summary(&ctx),
            "Client session for u1 (ghost login by op-3)"
        );

        let ctx = extract_context(&claims("u2", "", "i1"));
        assert_eq!(session_summary(&ctx), "Unassigned session for u2");
    }

    #[test]
    fn test_rejection_body() {
        assert_eq!(
            rejection_body(AuthError::TokenMissing),
            json!({
                "error": "Authentication token is missing",
                "code": "token_missing"
            })
        );
    }

    #[test]
    fn test_inspect_token_garbage() {
        let config = JwtConfig::new("cli-test-secret");
        assert_eq!(
            inspect_token("not.a.token", None, &config),
            Err(AuthError::TokenInvalid)
        );
    }
}
