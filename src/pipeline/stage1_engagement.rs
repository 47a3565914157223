/// Engagement rate in percent. Zero posts yield zero rather than a division
/// fault.
pub fn compute_engagement_rate(posts_count: u32, avg_likes: f64, comments_count: u32) -> f64 {
    if posts_count == 0 {
        return 0.0;
    }
    let posts = posts_count as f64;
    let comments_per_post = comments_count as f64 / posts;
    (avg_likes + comments_per_post) / posts * 100.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_engagement.rs"]
mod tests;
