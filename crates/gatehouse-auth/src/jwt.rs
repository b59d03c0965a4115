//! Session token validation.
//!
//! Validation is a single pass in two stages:
//!
//! 1. **Structural**: segments, encoding, signature against the configured
//!    shared secret, presence of `exp`. Any failure is [`AuthError::TokenInvalid`].
//! 2. **Temporal**: `exp` and `nbf` against the supplied clock, with the
//!    configured leeway. Failure is [`AuthError::TokenExpired`]. An `iat` in
//!    the future is [`AuthError::TokenInvalid`].
//!
//! [`authenticate`] layers the bearer credential path on top: a request with
//! no usable credential is [`AuthError::TokenMissing`], distinct from one whose
//! credential fails validation.
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_auth::{authenticate, validate_token};
//! use gatehouse_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let claims = validate_token(&token, &config)?;
//! let claims = authenticate(request_header, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::{debug, instrument, warn};

use gatehouse_config::JwtConfig;
use gatehouse_core::AuthError;

use crate::claims::JwtClaims;
use crate::context::parse_ghost_issuer;

const BEARER_SCHEME: &str = "Bearer";

/// Why a credential could not be taken from the request.
///
/// These are the signals produced before any token parsing happens; they are
/// mapped onto [`AuthError`] so callers only ever see the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialRejection {
    /// No credential was supplied, or not in the expected scheme.
    BadRequest,
    /// A credential was supplied but cannot be used as a token.
    Unauthorized,
}

impl From<CredentialRejection> for AuthError {
    fn from(rejection: CredentialRejection) -> Self {
        match rejection {
            CredentialRejection::BadRequest => AuthError::TokenMissing,
            CredentialRejection::Unauthorized => AuthError::TokenInvalid,
        }
    }
}

/// Validates `token` against the current time.
pub fn validate_token(token: &str, jwt_config: &JwtConfig) -> Result<JwtClaims, AuthError> {
    validate_token_at(token, jwt_config, Utc::now().timestamp())
}

/// Validates `token` as of `now` (Unix seconds).
///
/// # Errors
///
/// - [`AuthError::TokenInvalid`] if the token is malformed, signed with a
///   different key or algorithm, lacks `exp`, or was issued in the future
/// - [`AuthError::TokenExpired`] if `exp` has passed or `nbf` is in the future
#[instrument(skip_all, fields(now = now))]
pub fn validate_token_at(
    token: &str,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<JwtClaims, AuthError> {
    let claims = decode_structure(token, jwt_config).inspect_err(|err| {
        warn!(code = err.code(), "Token rejected during decoding");
    })?;

    check_validity_window(&claims, now, jwt_config.leeway).inspect_err(|err| {
        warn!(
            code = err.code(),
            exp = claims.exp,
            nbf = claims.nbf,
            "Token outside its validity window"
        );
    })?;

    debug!(user_id = %claims.id, "Token validated");
    Ok(claims)
}

fn decode_structure(token: &str, jwt_config: &JwtConfig) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jwt_config.algorithm);
    // exp and nbf are checked against the caller's clock below.
    validation.validate_exp = false;
    validation.validate_nbf = false;
    // aud holds the session role.
    validation.validate_aud = false;

    decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| classify(err.kind()))
}

fn classify(kind: &ErrorKind) -> AuthError {
    match kind {
        ErrorKind::ExpiredSignature | ErrorKind::ImmatureSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid,
    }
}

fn check_validity_window(claims: &JwtClaims, now: i64, leeway: u64) -> Result<(), AuthError> {
    let leeway = i64::try_from(leeway).unwrap_or(i64::MAX);

    if claims.exp < now.saturating_sub(leeway) {
        return Err(AuthError::TokenExpired);
    }

    if let Some(nbf) = claims.nbf {
        if nbf > now.saturating_add(leeway) {
            return Err(AuthError::TokenExpired);
        }
    }

    // Checked after exp and nbf so an expired token reports as expired.
    if let Some(iat) = claims.iat {
        if iat > now.saturating_add(leeway) {
            return Err(AuthError::TokenInvalid);
        }
    }

    Ok(())
}

/// Takes the token out of an `Authorization` header value.
///
/// The scheme is matched case-insensitively. An absent or empty header, any
/// other scheme, or an empty token is [`CredentialRejection::BadRequest`]; a
/// token containing whitespace is [`CredentialRejection::Unauthorized`].
pub fn bearer_token(header: Option<&str>) -> Result<&str, CredentialRejection> {
    let header = header
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or(CredentialRejection::BadRequest)?;

    let (scheme, token) = header
        .split_once(' ')
        .ok_or(CredentialRejection::BadRequest)?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(CredentialRejection::BadRequest);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(CredentialRejection::BadRequest);
    }
    if token.contains(char::is_whitespace) {
        return Err(CredentialRejection::Unauthorized);
    }

    Ok(token)
}

/// Validates the credential from an `Authorization` header value.
pub fn authenticate(header: Option<&str>, jwt_config: &JwtConfig) -> Result<JwtClaims, AuthError> {
    let token = bearer_token(header).map_err(|rejection| {
        let err = AuthError::from(rejection);
        warn!(code = err.code(), "No usable bearer credential");
        err
    })?;

    validate_token(token, jwt_config)
}

/// Validates a raw token taken from somewhere other than a header, such as a
/// `token` query parameter. `None` or an empty string is [`AuthError::TokenMissing`].
pub fn authenticate_token(
    token: Option<&str>,
    jwt_config: &JwtConfig,
) -> Result<JwtClaims, AuthError> {
    match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => validate_token(token, jwt_config),
        None => Err(AuthError::TokenMissing),
    }
}

/// Checks the token issuer against the issuer recorded for the user.
///
/// Returns `Ok(true)` when the token is a ghost login, `Ok(false)` for a
/// regular session whose issuer matches `expected_issuer`.
///
/// # Errors
///
/// [`AuthError::TokenInvalid`] when the user has no recorded issuer, or the
/// issuer neither matches nor encodes a ghost login.
pub fn verify_session_issuer(claims: &JwtClaims, expected_issuer: &str) -> Result<bool, AuthError> {
    if expected_issuer.is_empty() {
        warn!(user_id = %claims.id, "User has no token issuer on record");
        return Err(AuthError::TokenInvalid);
    }

    if claims.issuer == expected_issuer {
        return Ok(false);
    }

    match parse_ghost_issuer(&claims.issuer) {
        Some(ghost_id) => {
            debug!(user_id = %claims.id, ghost_id = %ghost_id, "Ghost session accepted");
            Ok(true)
        }
        None => {
            warn!(user_id = %claims.id, "Token issuer does not match user");
            Err(AuthError::TokenInvalid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const NOW: i64 = 1_700_000_000;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig::new("test-secret-key-at-least-32-characters-long")
    }

    fn sample_claims(exp: i64) -> JwtClaims {
        JwtClaims {
            id: "u1".to_string(),
            audience: "client".to_string(),
            issuer: "i1".to_string(),
            subject: "u1".to_string(),
            exp,
            iat: Some(NOW),
            nbf: None,
        }
    }

    fn sign(claims: &JwtClaims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_validate_token_at_success() {
        let config = get_test_jwt_config();
        let claims = sample_claims(NOW + 3600);
        let token = sign(&claims, &config.secret);

        assert_eq!(validate_token_at(&token, &config, NOW), Ok(claims));
    }

    #[test]
    fn test_validate_token_at_expired() {
        let config = get_test_jwt_config();
        let token = sign(&sample_claims(NOW - 1), &config.secret);

        assert_eq!(
            validate_token_at(&token, &config, NOW),
            Err(AuthError::TokenExpired)
        );
    }

    #[test]
    fn test_exp_equal_to_now_is_valid() {
        let config = get_test_jwt_config();
        let token = sign(&sample_claims(NOW), &config.secret);

        assert!(validate_token_at(&token, &config, NOW).is_ok());
    }

    #[test]
    fn test_leeway_extends_window() {
        let config = get_test_jwt_config().with_leeway(60);
        let token = sign(&sample_claims(NOW - 30), &config.secret);

        assert!(validate_token_at(&token, &config, NOW).is_ok());
        assert_eq!(
            validate_token_at(&token, &config, NOW + 120),
            Err(AuthError::TokenExpired)
        );
    }

    #[test]
    fn test_not_yet_valid_is_expired_kind() {
        let config = get_test_jwt_config();
        let mut claims = sample_claims(NOW + 3600);
        claims.nbf = Some(NOW + 600);
        let token = sign(&claims, &config.secret);

        assert_eq!(
            validate_token_at(&token, &config, NOW),
            Err(AuthError::TokenExpired)
        );
        assert!(validate_token_at(&token, &config, NOW + 601).is_ok());
    }

    #[test]
    fn test_issued_in_future_is_invalid() {
        let config = get_test_jwt_config();
        let mut claims = sample_claims(NOW + 7200);
        claims.iat = Some(NOW + 3600);
        let token = sign(&claims, &config.secret);

        assert_eq!(
            validate_token_at(&token, &config, NOW),
            Err(AuthError::TokenInvalid)
        );
        assert!(validate_token_at(&token, &config, NOW + 3600).is_ok());

        let lenient = get_test_jwt_config().with_leeway(3600);
        assert!(validate_token_at(&token, &lenient, NOW).is_ok());
    }

    #[test]
    fn test_expired_takes_precedence_over_future_iat() {
        let config = get_test_jwt_config();
        let mut claims = sample_claims(NOW - 10);
        claims.iat = Some(NOW + 3600);
        let token = sign(&claims, &config.secret);

        assert_eq!(
            validate_token_at(&token, &config, NOW),
            Err(AuthError::TokenExpired)
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let config = get_test_jwt_config();
        let token = sign(&sample_claims(NOW + 3600), "different-secret-key-at-least-32-characters");

        assert_eq!(
            validate_token_at(&token, &config, NOW),
            Err(AuthError::TokenInvalid)
        );
    }

    #[test]
    fn test_expired_with_wrong_secret_is_invalid() {
        let config = get_test_jwt_config();
        let token = sign(&sample_claims(NOW - 3600), "different-secret-key-at-least-32-characters");

        assert_eq!(
            validate_token_at(&token, &config, NOW),
            Err(AuthError::TokenInvalid)
        );
    }

    #[test]
    fn test_malformed_is_invalid() {
        let config = get_test_jwt_config();
        assert_eq!(
            validate_token_at("invalid.token.here", &config, NOW),
            Err(AuthError::TokenInvalid)
        );
        assert_eq!(
            validate_token_at("", &config, NOW),
            Err(AuthError::TokenInvalid)
        );
    }

    #[test]
    fn test_missing_exp_is_invalid() {
        #[derive(serde::Serialize)]
        struct NoExp {
            jti: String,
        }
        let config = get_test_jwt_config();
        let token = encode(
            &Header::default(),
            &NoExp {
                jti: "u1".to_string(),
            },
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            validate_token_at(&token, &config, NOW),
            Err(AuthError::TokenInvalid)
        );
    }

    #[test]
    fn test_algorithm_mismatch_is_invalid() {
        let config = get_test_jwt_config();
        let token = encode(
            &Header::new(jsonwebtoken::Algorithm::HS512),
            &sample_claims(NOW + 3600),
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            validate_token_at(&token, &config, NOW),
            Err(AuthError::TokenInvalid)
        );
        let hs512 = config.with_algorithm(jsonwebtoken::Algorithm::HS512);
        assert!(validate_token_at(&token, &hs512, NOW).is_ok());
    }

    #[test]
    fn test_classify_library_kinds() {
        assert_eq!(classify(&ErrorKind::ExpiredSignature), AuthError::TokenExpired);
        assert_eq!(classify(&ErrorKind::ImmatureSignature), AuthError::TokenExpired);
        assert_eq!(classify(&ErrorKind::InvalidSignature), AuthError::TokenInvalid);
        assert_eq!(classify(&ErrorKind::InvalidToken), AuthError::TokenInvalid);
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(bearer_token(Some("bearer abc")), Ok("abc"));
        assert_eq!(bearer_token(Some("  Bearer   abc  ")), Ok("abc"));
    }

    #[test]
    fn test_bearer_token_missing() {
        assert_eq!(bearer_token(None), Err(CredentialRejection::BadRequest));
        assert_eq!(bearer_token(Some("")), Err(CredentialRejection::BadRequest));
        assert_eq!(bearer_token(Some("Bearer")), Err(CredentialRejection::BadRequest));
        assert_eq!(bearer_token(Some("Bearer   ")), Err(CredentialRejection::BadRequest));
        assert_eq!(
            bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(CredentialRejection::BadRequest)
        );
    }

    #[test]
    fn test_bearer_token_unusable() {
        assert_eq!(
            bearer_token(Some("Bearer abc def")),
            Err(CredentialRejection::Unauthorized)
        );
    }

    #[test]
    fn test_rejection_mapping() {
        assert_eq!(
            AuthError::from(CredentialRejection::BadRequest),
            AuthError::TokenMissing
        );
        assert_eq!(
            AuthError::from(CredentialRejection::Unauthorized),
            AuthError::TokenInvalid
        );
    }

    #[test]
    fn test_authenticate_token_missing() {
        let config = get_test_jwt_config();
        assert_eq!(authenticate_token(None, &config), Err(AuthError::TokenMissing));
        assert_eq!(
            authenticate_token(Some("  "), &config),
            Err(AuthError::TokenMissing)
        );
        assert_eq!(
            authenticate_token(Some("garbage"), &config),
            Err(AuthError::TokenInvalid)
        );
    }

    #[test]
    fn test_verify_session_issuer() {
        let mut claims = sample_claims(NOW + 3600);
        assert_eq!(verify_session_issuer(&claims, "i1"), Ok(false));
        assert_eq!(
            verify_session_issuer(&claims, "other"),
            Err(AuthError::TokenInvalid)
        );
        assert_eq!(verify_session_issuer(&claims, ""), Err(AuthError::TokenInvalid));

        claims.issuer = "ghost|op-7".to_string();
        assert_eq!(verify_session_issuer(&claims, "i1"), Ok(true));
    }
}
