use crate::model::traits::trait_order;
use crate::report::{DominantStat, ProfileReport, TraitStats, format_f64_6, format_percent_1};

const CHART_WIDTH: usize = 40;
const PROGRESS_WIDTH: usize = 20;

pub fn render_report_text(report: &ProfileReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    out.push_str("Digital Footprint Personality Mapper\n");
    out.push_str("====================================\n\n");

    out.push_str("1. Profile summary\n");
    out.push_str(&format!("Username: {}\n", summary.username));
    out.push_str(&format!("Platform: {}\n", summary.platform));
    out.push_str(&format!("Posts Analyzed: {}\n", summary.posts_count));
    out.push_str(&format!(
        "Engagement Rate: {:.2}%\n",
        summary.engagement_rate
    ));
    out.push_str(&format!(
        "Avg Response Time: {} hrs\n\n",
        summary.response_time_hours
    ));

    out.push_str("2. Big Five personality traits\n");
    let label_width = trait_order()
        .iter()
        .map(|t| t.name().len())
        .max()
        .unwrap_or(0);
    for (t, score) in report.scores.iter() {
        out.push_str(&format!(
            "{:<width$} |{}| {}\n",
            t.name(),
            bar(score, CHART_WIDTH, '#', ' '),
            format_percent_1(score),
            width = label_width
        ));
    }
    out.push_str(&format!(
        "Dominant trait: {}\n\n",
        report.scores.dominant().name()
    ));

    out.push_str("3. Trait details\n");
    for (t, score) in report.scores.iter() {
        out.push_str(&format!("{} ({:.2})\n", t.name(), score));
        out.push_str(&format!("[{}]\n", bar(score, PROGRESS_WIDTH, '=', '.')));
        out.push_str(t.caption());
        out.push_str("\n---\n");
    }

    out
}

pub fn render_batch_text(n_profiles: usize, stats: &[TraitStats], dominant: &[DominantStat]) -> String {
    let mut out = String::new();
    out.push_str("Digital Footprint Personality Mapper: batch summary\n");
    out.push_str("==================================================\n\n");
    out.push_str(&format!("Profiles scored: {}\n\n", n_profiles));

    out.push_str("trait\tmedian\tp10\tp90\tdominant_count\tdominant_fraction\n");
    for s in stats {
        let dom = dominant.iter().find(|d| d.name == s.name);
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            s.name,
            format_f64_6(s.median),
            format_f64_6(s.p10),
            format_f64_6(s.p90),
            dom.map(|d| d.count).unwrap_or(0),
            format_f64_6(dom.map(|d| d.fraction).unwrap_or(0.0)),
        ));
    }
    out
}

/// Fixed-width bar with `round(score * width)` filled cells.
pub fn bar(score: f64, width: usize, fill: char, empty: char) -> String {
    let filled = ((score.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let mut out = String::with_capacity(width);
    for i in 0..width {
        out.push(if i < filled { fill } else { empty });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
