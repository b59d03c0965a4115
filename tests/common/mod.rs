#![allow(dead_code)]

use chrono::{Duration, Utc};
use gatehouse::{JwtClaims, JwtConfig, MemoryPolicyStore};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub const TEST_POLICY: &str = r"
p, admin:teamA, docs, read
p, admin:teamA, docs, write
p, leader:sales, sales, GET
p, leader:sales, sales, POST
p, leader:sales, reports, GET
p, staff:sales, sales, GET
p, staff:sales, orphans, GET

g2, /documents, docs
g2, /sales/*, sales
g2, /sales/reports, sales
g2, /reports/sales, reports
";

pub fn get_test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn test_store() -> MemoryPolicyStore {
    MemoryPolicyStore::from_csv(TEST_POLICY).unwrap()
}

pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// Claims for a session that expires in one hour.
pub fn session_claims(user_id: &str, role: &str, issuer: &str) -> JwtClaims {
    let now = Utc::now();
    JwtClaims {
        id: user_id.to_string(),
        audience: role.to_string(),
        issuer: issuer.to_string(),
        subject: user_id.to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: Some(now.timestamp()),
        nbf: None,
    }
}

pub fn sign_claims(claims: &JwtClaims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn sign_test_token(claims: &JwtClaims) -> String {
    sign_claims(claims, TEST_SECRET)
}
