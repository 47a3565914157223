use std::path::Path;

pub mod json;
pub mod metrics;
pub mod reader;
pub mod tsv;

use json::parse_profiles_json;
use metrics::RawMetrics;
use reader::payload_extension;
use tsv::parse_profiles_tsv;

use crate::model::features::FeatureSet;
use crate::model::profile::{Platform, ProfileSummary};

pub const DEFAULT_USERNAME: &str = "yugal71";

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Tsv,
}

/// One unvalidated profile as read from a file or the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProfile {
    pub username: String,
    pub platform: Option<String>,
    pub metrics: RawMetrics,
}

/// A profile ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInput {
    pub username: String,
    pub platform: Platform,
    pub features: FeatureSet,
}

impl ProfileInput {
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            username: self.username.clone(),
            platform: self.platform,
            posts_count: self.features.posts_count,
            engagement_rate: self.features.engagement_rate,
            response_time_hours: self.features.response_time_hours,
        }
    }
}

impl RawProfile {
    pub fn validate(&self) -> Result<ProfileInput, InputError> {
        let platform = match &self.platform {
            Some(p) => p
                .parse::<Platform>()
                .map_err(|msg| InputError::InvalidInput(format!("{}: {msg}", self.username)))?,
            None => Platform::default(),
        };
        let features = self.metrics.validate(&self.username)?;
        Ok(ProfileInput {
            username: self.username.clone(),
            platform,
            features,
        })
    }
}

pub fn detect_format(path: &Path) -> Result<InputFormat, InputError> {
    match payload_extension(path).as_deref() {
        Some("json") => Ok(InputFormat::Json),
        Some("tsv") | Some("txt") => Ok(InputFormat::Tsv),
        _ => Err(InputError::InvalidInput(format!(
            "cannot infer profile format of {} (use .json or .tsv, optionally .gz)",
            path.display()
        ))),
    }
}

pub fn load_profiles(path: &Path) -> Result<Vec<ProfileInput>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let format = detect_format(path)?;
    let raw = match format {
        InputFormat::Json => parse_profiles_json(path)?,
        InputFormat::Tsv => parse_profiles_tsv(path)?,
    };
    tracing::info!(
        path = %path.display(),
        format = ?format,
        profiles = raw.len(),
        "loaded profile records"
    );
    if raw.is_empty() {
        return Err(InputError::MissingInput(format!(
            "no profiles in {}",
            path.display()
        )));
    }
    raw.iter().map(RawProfile::validate).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
