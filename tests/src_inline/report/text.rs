
use super::*;
use crate::model::profile::{Platform, ProfileSummary};
use crate::model::traits::TraitScores;

fn sample_report() -> ProfileReport {
    ProfileReport {
        summary: ProfileSummary {
            username: "yugal71".to_string(),
            platform: Platform::Twitter,
            posts_count: 245,
            engagement_rate: 11.665972,
            response_time_hours: 2,
        },
        scores: TraitScores {
            openness: 1.0,
            conscientiousness: 1.0,
            extraversion: 0.5,
            agreeableness: 0.25,
            neuroticism: 0.0,
        },
    }
}

#[test]
fn test_bar_widths() {
    assert_eq!(bar(0.0, 4, '#', '.'), "....");
    assert_eq!(bar(1.0, 4, '#', '.'), "####");
    assert_eq!(bar(0.5, 4, '#', '.'), "##..");
    assert_eq!(bar(2.0, 4, '#', '.'), "####");
    assert_eq!(bar(-1.0, 4, '#', '.'), "....");
}

#[test]
fn test_profile_section() {
    let text = render_report_text(&sample_report());
    assert!(text.contains("Username: yugal71\n"));
    assert!(text.contains("Platform: Twitter\n"));
    assert!(text.contains("Posts Analyzed: 245\n"));
    assert!(text.contains("Engagement Rate: 11.67%\n"));
    assert!(text.contains("Avg Response Time: 2 hrs\n"));
}

#[test]
fn test_chart_and_details() {
    let text = render_report_text(&sample_report());
    assert!(text.contains("Dominant trait: Openness\n"));
    assert!(text.contains("| 100.0%\n"));
    assert!(text.contains("| 25.0%\n"));
    assert!(text.contains("Extraversion (0.50)\n[==========..........]\n"));
    assert!(text.contains("Neuroticism (0.00)\n"));
    assert!(text.contains("Represents emotional stability and how one handles stress."));
    let openness = text.find("Openness (1.00)").unwrap();
    let neuroticism = text.find("Neuroticism (0.00)").unwrap();
    assert!(openness < neuroticism);
    assert_eq!(text.matches("\n---\n").count(), 5);
}

#[test]
fn test_batch_text() {
    let stats = vec![TraitStats {
        name: "Openness",
        median: 0.5,
        p10: 0.1,
        p90: 0.9,
    }];
    let dominant = vec![DominantStat {
        name: "Openness",
        count: 3,
        fraction: 0.75,
    }];
    let text = render_batch_text(4, &stats, &dominant);
    assert!(text.contains("Profiles scored: 4\n"));
    assert!(text.contains("Openness\t0.500000\t0.100000\t0.900000\t3\t0.750000\n"));
}
