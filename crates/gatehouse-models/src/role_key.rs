use std::fmt;

const SEPARATOR: char = ':';

/// A policy subject of the form `"<role>:<team>"`.
///
/// The team segment is optional and segments past the second are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RoleKey {
    role: String,
    team: String,
}

impl RoleKey {
    pub fn parse(key: &str) -> Self {
        let mut segments = key.split(SEPARATOR);
        let role = segments.next().unwrap_or_default();
        let team = segments.next().unwrap_or_default();

        Self {
            role: role.to_string(),
            team: team.to_string(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn has_team(&self) -> bool {
        !self.team.is_empty()
    }

    pub fn into_parts(self) -> (String, String) {
        (self.role, self.team)
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_team() {
            write!(f, "{}{}{}", self.role, SEPARATOR, self.team)
        } else {
            write!(f, "{}", self.role)
        }
    }
}

impl From<&str> for RoleKey {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}
