use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::ProfileInput;
use crate::model::traits::{TraitScores, trait_order};
use crate::report::json::{BatchProfileJson, BatchSummaryJson, render_batch_json, render_profile_json};
use crate::report::svg::render_chart_svg;
use crate::report::text::{render_batch_text, render_report_text};
use crate::report::{
    ProfileReport, ReportError, ToolMeta, dominant_stats, format_f64_6, trait_stats,
};

pub const REPORT_TXT: &str = "report.txt";
pub const SUMMARY_JSON: &str = "summary.json";
pub const CHART_SVG: &str = "chart.svg";
pub const TRAITS_TSV: &str = "traits.tsv";

pub fn write_profile_reports(
    profile: &ProfileInput,
    scores: &TraitScores,
    out_dir: &Path,
) -> Result<(), ReportError> {
    create_dir(out_dir)?;

    let summary = profile.summary();
    let json = render_profile_json(&summary, &profile.features, scores)?;
    write_text(&out_dir.join(SUMMARY_JSON), &json)?;

    let report = ProfileReport {
        summary,
        scores: *scores,
    };
    write_text(&out_dir.join(REPORT_TXT), &render_report_text(&report))?;
    write_text(&out_dir.join(CHART_SVG), &render_chart_svg(scores))?;

    tracing::info!(out_dir = %out_dir.display(), "wrote profile reports");
    Ok(())
}

pub fn write_batch_reports(
    profiles: &[ProfileInput],
    scores: &[TraitScores],
    out_dir: &Path,
) -> Result<(), ReportError> {
    create_dir(out_dir)?;

    let order = row_order(profiles);
    write_traits_tsv(profiles, scores, &order, &out_dir.join(TRAITS_TSV))?;

    let stats = trait_stats(scores);
    let dominant = dominant_stats(scores);
    let doc = BatchSummaryJson {
        tool: ToolMeta::current(),
        n_profiles: profiles.len(),
        traits: &stats,
        dominant: &dominant,
        profiles: order
            .iter()
            .map(|&i| BatchProfileJson {
                username: &profiles[i].username,
                platform: profiles[i].platform.name(),
                scores: &scores[i],
                dominant_trait: scores[i].dominant().name(),
            })
            .collect(),
    };
    write_text(&out_dir.join(SUMMARY_JSON), &render_batch_json(&doc)?)?;
    write_text(
        &out_dir.join(REPORT_TXT),
        &render_batch_text(profiles.len(), &stats, &dominant),
    )?;

    tracing::info!(
        out_dir = %out_dir.display(),
        profiles = profiles.len(),
        "wrote batch reports"
    );
    Ok(())
}

/// Rows sorted by username; equal usernames keep input order.
fn row_order(profiles: &[ProfileInput]) -> Vec<usize> {
    let mut order = (0..profiles.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| match profiles[a].username.cmp(&profiles[b].username) {
        std::cmp::Ordering::Equal => a.cmp(&b),
        other => other,
    });
    order
}

fn write_traits_tsv(
    profiles: &[ProfileInput],
    scores: &[TraitScores],
    order: &[usize],
    path: &Path,
) -> Result<(), ReportError> {
    let io = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io)?);

    let mut header = vec![
        "username",
        "platform",
        "posts_count",
        "engagement_rate",
        "response_time_hours",
    ];
    header.extend(trait_order().iter().map(|t| t.name()));
    header.push("dominant_trait");
    writeln!(w, "{}", header.join("\t")).map_err(io)?;

    for &i in order {
        let p = &profiles[i];
        let mut row = vec![
            sanitize_field(&p.username),
            p.platform.name().to_string(),
            p.features.posts_count.to_string(),
            format_f64_6(p.features.engagement_rate),
            p.features.response_time_hours.to_string(),
        ];
        row.extend(scores[i].iter().map(|(_, v)| format_f64_6(v)));
        row.push(scores[i].dominant().name().to_string());
        writeln!(w, "{}", row.join("\t")).map_err(io)?;
    }
    w.flush().map_err(io)?;
    Ok(())
}

fn sanitize_field(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

fn create_dir(dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.display().to_string(),
        source,
    })
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io)?);
    w.write_all(contents.as_bytes()).map_err(io)?;
    w.flush().map_err(io)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
