use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::input::metrics::RawMetrics;
use crate::input::reader::open_maybe_gz;
use crate::input::{DEFAULT_USERNAME, InputError, RawProfile};

#[derive(Debug, Deserialize)]
struct JsonProfile {
    #[serde(default = "default_username")]
    username: String,
    #[serde(default)]
    platform: Option<String>,
    #[serde(flatten)]
    metrics: RawMetrics,
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

pub fn parse_profiles_json(path: &Path) -> Result<Vec<RawProfile>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| InputError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_profiles_json_str(&text)
}

pub fn parse_profiles_json_str(text: &str) -> Result<Vec<RawProfile>, InputError> {
    let doc: serde_json::Value = serde_json::from_str(text)?;
    let records = if doc.is_array() {
        serde_json::from_value::<Vec<JsonProfile>>(doc)?
    } else {
        vec![serde_json::from_value::<JsonProfile>(doc)?]
    };
    Ok(records
        .into_iter()
        .map(|p| RawProfile {
            username: p.username,
            platform: p.platform,
            metrics: p.metrics,
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/json.rs"]
mod tests;
