use serde::Serialize;

use crate::model::profile::ProfileSummary;
use crate::model::traits::TraitScores;

pub mod json;
pub mod svg;
pub mod text;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

impl ToolMeta {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Everything the renderers need for one profile.
#[derive(Debug, Clone)]
pub struct ProfileReport {
    pub summary: ProfileSummary,
    pub scores: TraitScores,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraitStats {
    pub name: &'static str,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DominantStat {
    pub name: &'static str,
    pub count: usize,
    pub fraction: f64,
}

pub fn trait_stats(scores: &[TraitScores]) -> Vec<TraitStats> {
    crate::model::traits::trait_order()
        .iter()
        .map(|&t| {
            let values = scores.iter().map(|s| s.get(t)).collect::<Vec<_>>();
            TraitStats {
                name: t.name(),
                median: median(&values),
                p10: p10(&values),
                p90: p90(&values),
            }
        })
        .collect()
}

pub fn dominant_stats(scores: &[TraitScores]) -> Vec<DominantStat> {
    let n = scores.len();
    crate::model::traits::trait_order()
        .iter()
        .map(|&t| {
            let count = scores.iter().filter(|s| s.dominant() == t).count();
            let fraction = if n > 0 { count as f64 / n as f64 } else { 0.0 };
            DominantStat {
                name: t.name(),
                count,
                fraction,
            }
        })
        .collect()
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_percent_1(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Nearest-rank quantile: the sorted value at `ceil((n - 1) * p)`, no
/// interpolation, so every result is one of the observed scores.
pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
