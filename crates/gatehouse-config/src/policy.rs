use std::env;
use std::path::PathBuf;

/// Location of the casbin-style policy CSV.
///
/// - `POLICY_PATH`: path to the policy file (default: `policy/policy.csv`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyConfig {
    pub policy_path: PathBuf,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            policy_path: PathBuf::from("policy/policy.csv"),
        }
    }
}

impl PolicyConfig {
    #[must_use]
    pub fn from_env() -> Self {
        env::var("POLICY_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| Self {
                policy_path: PathBuf::from(v),
            })
            .unwrap_or_default()
    }
}
