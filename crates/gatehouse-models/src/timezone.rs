//! Timezones accepted from the `Timezone` request header.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Timezone {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "UTC")]
    Utc,
    #[serde(rename = "Asia/Ho_Chi_Minh")]
    AsiaHoChiMinh,
    #[serde(rename = "Asia/Singapore")]
    AsiaSingapore,
    #[serde(rename = "Asia/Bangkok")]
    AsiaBangkok,
    #[serde(rename = "Asia/Shanghai")]
    AsiaShanghai,
    #[serde(rename = "Asia/Tokyo")]
    AsiaTokyo,
    #[serde(rename = "Asia/Kolkata")]
    AsiaKolkata,
    #[serde(rename = "Europe/London")]
    EuropeLondon,
    #[serde(rename = "Europe/Paris")]
    EuropeParis,
    #[serde(rename = "America/New_York")]
    AmericaNewYork,
    #[serde(rename = "America/Chicago")]
    AmericaChicago,
    #[serde(rename = "America/Los_Angeles")]
    AmericaLosAngeles,
    #[serde(rename = "Australia/Sydney")]
    AustraliaSydney,
}

impl Timezone {
    pub const ALL: [Timezone; 13] = [
        Timezone::Utc,
        Timezone::AsiaHoChiMinh,
        Timezone::AsiaSingapore,
        Timezone::AsiaBangkok,
        Timezone::AsiaShanghai,
        Timezone::AsiaTokyo,
        Timezone::AsiaKolkata,
        Timezone::EuropeLondon,
        Timezone::EuropeParis,
        Timezone::AmericaNewYork,
        Timezone::AmericaChicago,
        Timezone::AmericaLosAngeles,
        Timezone::AustraliaSydney,
    ];

    /// IANA zone name, or `""` for [`Timezone::Unset`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Utc => "UTC",
            Self::AsiaHoChiMinh => "Asia/Ho_Chi_Minh",
            Self::AsiaSingapore => "Asia/Singapore",
            Self::AsiaBangkok => "Asia/Bangkok",
            Self::AsiaShanghai => "Asia/Shanghai",
            Self::AsiaTokyo => "Asia/Tokyo",
            Self::AsiaKolkata => "Asia/Kolkata",
            Self::EuropeLondon => "Europe/London",
            Self::EuropeParis => "Europe/Paris",
            Self::AmericaNewYork => "America/New_York",
            Self::AmericaChicago => "America/Chicago",
            Self::AmericaLosAngeles => "America/Los_Angeles",
            Self::AustraliaSydney => "Australia/Sydney",
        }
    }

    /// Parses an IANA name, returning [`Timezone::Unset`] for anything unsupported.
    pub fn parse_or_default(value: &str) -> Self {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|tz| tz.as_str() == value)
            .unwrap_or_default()
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::Unset
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
