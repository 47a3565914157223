use serde::Serialize;

/// Validated behavioral metrics for one profile. Every field already lies in
/// its declared range; `engagement_rate` is derived from the others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureSet {
    pub posts_count: u32,
    pub avg_likes: f64,
    pub comments_count: u32,
    pub post_frequency: u32,
    pub response_time_hours: u32,
    pub sentiment_positive: u32,
    pub sentiment_neutral: u32,
    pub emoji_usage: u32,
    pub hashtag_usage: u32,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct IntRange {
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
}

pub const POSTS_COUNT: IntRange = IntRange {
    name: "posts_count",
    min: 0,
    max: 1000,
};
pub const COMMENTS_COUNT: IntRange = IntRange {
    name: "comments_count",
    min: 0,
    max: 10_000,
};
pub const POST_FREQUENCY: IntRange = IntRange {
    name: "post_frequency",
    min: 0,
    max: 50,
};
pub const RESPONSE_TIME_HOURS: IntRange = IntRange {
    name: "response_time_hours",
    min: 0,
    max: 48,
};
pub const SENTIMENT_POSITIVE: IntRange = IntRange {
    name: "sentiment_positive",
    min: 0,
    max: 100,
};
pub const SENTIMENT_NEUTRAL: IntRange = IntRange {
    name: "sentiment_neutral",
    min: 0,
    max: 100,
};
pub const EMOJI_USAGE: IntRange = IntRange {
    name: "emoji_usage",
    min: 0,
    max: 20,
};
pub const HASHTAG_USAGE: IntRange = IntRange {
    name: "hashtag_usage",
    min: 0,
    max: 10,
};

pub const AVG_LIKES_MIN: f64 = 0.0;
pub const AVG_LIKES_MAX: f64 = 100.0;

pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
