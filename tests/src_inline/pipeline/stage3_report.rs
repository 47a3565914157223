
use super::*;
use crate::input::RawProfile;
use crate::input::metrics::RawMetrics;
use crate::pipeline::stage2_traits::run_stage2;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("footprint_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn profile(username: &str, platform: &str, metrics: RawMetrics) -> ProfileInput {
    RawProfile {
        username: username.to_string(),
        platform: Some(platform.to_string()),
        metrics,
    }
    .validate()
    .unwrap()
}

#[test]
fn test_profile_reports_written() {
    let dir = make_temp_dir().join("nested");
    let p = profile("yugal71", "twitter", RawMetrics::default());
    let scores = run_stage2(std::slice::from_ref(&p.features));
    write_profile_reports(&p, &scores[0], &dir).unwrap();

    let report = std::fs::read_to_string(dir.join(REPORT_TXT)).unwrap();
    assert!(report.contains("Username: yugal71"));
    assert!(report.contains("Engagement Rate: 11.67%"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join(SUMMARY_JSON)).unwrap()).unwrap();
    assert_eq!(json["tool"]["name"], "footprint-traits");
    assert_eq!(json["profile"]["username"], "yugal71");
    assert_eq!(json["profile"]["platform"], "Twitter");
    assert_eq!(json["features"]["posts_count"], 245);
    assert_eq!(json["scores"]["Openness"], 1.0);
    let agreeableness = json["scores"]["Agreeableness"].as_f64().unwrap();
    assert!((agreeableness - 0.3745).abs() < 1e-12);
    assert_eq!(json["dominant_trait"], "Openness");

    let svg = std::fs::read_to_string(dir.join(CHART_SVG)).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn test_batch_rows_sorted_by_username() {
    let dir = make_temp_dir();
    let quiet = RawMetrics {
        sentiment_positive: 0,
        response_time_hours: 48,
        ..RawMetrics::default()
    };
    let profiles = vec![
        profile("mia", "instagram", RawMetrics::default()),
        profile("abe", "facebook", quiet),
        profile("mia", "twitter", quiet),
    ];
    let features = profiles.iter().map(|p| p.features).collect::<Vec<_>>();
    let scores = run_stage2(&features);
    write_batch_reports(&profiles, &scores, &dir).unwrap();

    let tsv = std::fs::read_to_string(dir.join(TRAITS_TSV)).unwrap();
    let lines = tsv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "username\tplatform\tposts_count\tengagement_rate\tresponse_time_hours\tOpenness\tConscientiousness\tExtraversion\tAgreeableness\tNeuroticism\tdominant_trait"
    );
    assert!(lines[1].starts_with("abe\tFacebook\t245\t"));
    assert!(lines[1].ends_with("\tNeuroticism"));
    assert!(lines[2].starts_with("mia\tInstagram\t"));
    assert!(lines[3].starts_with("mia\tTwitter\t"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join(SUMMARY_JSON)).unwrap()).unwrap();
    assert_eq!(json["n_profiles"], 3);
    assert_eq!(json["traits"].as_array().unwrap().len(), 5);
    assert_eq!(json["profiles"][0]["username"], "abe");
    assert_eq!(json["dominant"][0]["name"], "Openness");
    assert_eq!(json["dominant"][0]["count"], 1);
    assert_eq!(json["dominant"][4]["count"], 2);

    let report = std::fs::read_to_string(dir.join(REPORT_TXT)).unwrap();
    assert!(report.contains("Profiles scored: 3"));
}

#[test]
fn test_sanitize_field() {
    assert_eq!(sanitize_field("a\tb\nc"), "a b c");
}
