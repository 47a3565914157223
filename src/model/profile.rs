use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Platform {
    #[default]
    Twitter,
    Facebook,
    Instagram,
}

impl Platform {
    pub fn name(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(Platform::Twitter),
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            other => Err(format!(
                "unknown platform '{other}' (use twitter|facebook|instagram)"
            )),
        }
    }
}

/// Header block shown next to the trait chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub username: String,
    pub platform: Platform,
    pub posts_count: u32,
    pub engagement_rate: f64,
    pub response_time_hours: u32,
}
