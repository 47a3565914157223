use serde::Deserialize;

use crate::input::InputError;
use crate::model::features::{
    AVG_LIKES_MAX, AVG_LIKES_MIN, COMMENTS_COUNT, EMOJI_USAGE, FeatureSet, HASHTAG_USAGE,
    IntRange, POST_FREQUENCY, POSTS_COUNT, RESPONSE_TIME_HOURS, SENTIMENT_NEUTRAL,
    SENTIMENT_POSITIVE,
};
use crate::pipeline::stage1_engagement::compute_engagement_rate;

pub const METRIC_FIELDS: [&str; 9] = [
    "posts_count",
    "avg_likes",
    "comments_count",
    "post_frequency",
    "response_time_hours",
    "sentiment_positive",
    "sentiment_neutral",
    "emoji_usage",
    "hashtag_usage",
];

/// Metric values as a user typed them. Nothing is range-checked yet.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawMetrics {
    pub posts_count: i64,
    pub avg_likes: f64,
    pub comments_count: i64,
    pub post_frequency: i64,
    pub response_time_hours: i64,
    pub sentiment_positive: i64,
    pub sentiment_neutral: i64,
    pub emoji_usage: i64,
    pub hashtag_usage: i64,
}

impl Default for RawMetrics {
    fn default() -> Self {
        Self {
            posts_count: 245,
            avg_likes: 23.5,
            comments_count: 1245,
            post_frequency: 7,
            response_time_hours: 2,
            sentiment_positive: 65,
            sentiment_neutral: 25,
            emoji_usage: 5,
            hashtag_usage: 3,
        }
    }
}

impl RawMetrics {
    /// Clamps every field into its declared range and derives the
    /// engagement rate. `label` only feeds the clamp warnings.
    pub fn validate(&self, label: &str) -> Result<FeatureSet, InputError> {
        if !self.avg_likes.is_finite() {
            return Err(InputError::InvalidInput(format!(
                "avg_likes for {label} must be finite, got {}",
                self.avg_likes
            )));
        }
        let avg_likes = if self.avg_likes < AVG_LIKES_MIN || self.avg_likes > AVG_LIKES_MAX {
            let clamped = self.avg_likes.clamp(AVG_LIKES_MIN, AVG_LIKES_MAX);
            tracing::warn!(
                profile = label,
                field = "avg_likes",
                value = self.avg_likes,
                clamped,
                "metric out of range; clamped"
            );
            clamped
        } else {
            self.avg_likes
        };

        let posts_count = clamp_int(POSTS_COUNT, self.posts_count, label);
        let comments_count = clamp_int(COMMENTS_COUNT, self.comments_count, label);

        Ok(FeatureSet {
            posts_count,
            avg_likes,
            comments_count,
            post_frequency: clamp_int(POST_FREQUENCY, self.post_frequency, label),
            response_time_hours: clamp_int(RESPONSE_TIME_HOURS, self.response_time_hours, label),
            sentiment_positive: clamp_int(SENTIMENT_POSITIVE, self.sentiment_positive, label),
            sentiment_neutral: clamp_int(SENTIMENT_NEUTRAL, self.sentiment_neutral, label),
            emoji_usage: clamp_int(EMOJI_USAGE, self.emoji_usage, label),
            hashtag_usage: clamp_int(HASHTAG_USAGE, self.hashtag_usage, label),
            engagement_rate: compute_engagement_rate(posts_count, avg_likes, comments_count),
        })
    }

    /// Assigns a metric by its column/field name. Returns `false` for names
    /// that are not metrics.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<bool, String> {
        let raw = raw.trim();
        let parse_int = |s: &str| -> Result<i64, String> {
            s.parse::<i64>()
                .map_err(|_| format!("{name} must be an integer, got '{s}'"))
        };
        match name {
            "posts_count" => self.posts_count = parse_int(raw)?,
            "avg_likes" => {
                self.avg_likes = raw
                    .parse::<f64>()
                    .map_err(|_| format!("avg_likes must be a number, got '{raw}'"))?
            }
            "comments_count" => self.comments_count = parse_int(raw)?,
            "post_frequency" => self.post_frequency = parse_int(raw)?,
            "response_time_hours" => self.response_time_hours = parse_int(raw)?,
            "sentiment_positive" => self.sentiment_positive = parse_int(raw)?,
            "sentiment_neutral" => self.sentiment_neutral = parse_int(raw)?,
            "emoji_usage" => self.emoji_usage = parse_int(raw)?,
            "hashtag_usage" => self.hashtag_usage = parse_int(raw)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn clamp_int(range: IntRange, value: i64, label: &str) -> u32 {
    let clamped = value.clamp(range.min, range.max);
    if clamped != value {
        tracing::warn!(
            profile = label,
            field = range.name,
            value,
            clamped,
            "metric out of range; clamped"
        );
    }
    clamped as u32
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/metrics.rs"]
mod tests;
