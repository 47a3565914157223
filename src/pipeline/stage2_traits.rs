use crate::model::features::{FeatureSet, clip01};
use crate::model::traits::TraitScores;

/// Heuristic trait mapping. Each term is evaluated in `f64` and the sum is
/// clipped into `[0, 1]`.
pub fn score_traits(f: &FeatureSet) -> TraitScores {
    let sentiment_positive = f.sentiment_positive as f64;
    let response_time = f.response_time_hours as f64;

    let openness = clip01(sentiment_positive / 100.0 + f.emoji_usage as f64 * 0.08);
    let conscientiousness =
        clip01(f.post_frequency as f64 / 50.0 + (1.0 - response_time / 48.0));
    let extraversion = clip01(f.engagement_rate / 100.0 + f.hashtag_usage as f64 * 0.1);
    let agreeableness =
        clip01(f.sentiment_neutral as f64 / 100.0 + f.comments_count as f64 / 10_000.0);
    let neuroticism = clip01((100.0 - sentiment_positive) / 100.0 + response_time / 48.0);

    TraitScores {
        openness,
        conscientiousness,
        extraversion,
        agreeableness,
        neuroticism,
    }
}

pub fn run_stage2(features: &[FeatureSet]) -> Vec<TraitScores> {
    let out = features.iter().map(score_traits).collect::<Vec<_>>();
    tracing::debug!(profiles = out.len(), "scored trait profiles");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_traits.rs"]
mod tests;
