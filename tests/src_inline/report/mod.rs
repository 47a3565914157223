
use super::*;

fn scores(values: [f64; 5]) -> TraitScores {
    TraitScores {
        openness: values[0],
        conscientiousness: values[1],
        extraversion: values[2],
        agreeableness: values[3],
        neuroticism: values[4],
    }
}

#[test]
fn test_quantiles() {
    let v = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p10(&v), 2.0);
    assert_eq!(p90(&v), 5.0);
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn test_percent_format() {
    assert_eq!(format_percent_1(1.0), "100.0%");
    assert_eq!(format_percent_1(0.25), "25.0%");
    assert_eq!(format_percent_1(0.41666), "41.7%");
    assert_eq!(format_f64_6(0.5), "0.500000");
}

#[test]
fn test_trait_stats_per_trait() {
    let all = vec![
        scores([0.1, 0.5, 0.0, 0.2, 1.0]),
        scores([0.3, 0.5, 0.0, 0.4, 0.0]),
        scores([0.2, 0.5, 0.0, 0.6, 0.5]),
    ];
    let stats = trait_stats(&all);
    assert_eq!(stats.len(), 5);
    assert_eq!(stats[0].name, "Openness");
    assert_eq!(stats[0].median, 0.2);
    assert_eq!(stats[3].median, 0.4);
    assert_eq!(stats[4].p90, 1.0);
    assert_eq!(stats[4].p10, 0.5);
}

#[test]
fn test_dominant_stats_counts() {
    let all = vec![
        scores([0.9, 0.5, 0.0, 0.2, 0.1]),
        scores([0.1, 0.5, 0.0, 0.2, 0.9]),
        scores([0.9, 0.9, 0.0, 0.2, 0.1]),
        scores([0.1, 0.2, 0.3, 0.2, 0.1]),
    ];
    let stats = dominant_stats(&all);
    let counts = stats.iter().map(|s| s.count).collect::<Vec<_>>();
    assert_eq!(counts, vec![2, 0, 1, 0, 1]);
    assert_eq!(stats[0].fraction, 0.5);
    assert!(dominant_stats(&[]).iter().all(|s| s.count == 0 && s.fraction == 0.0));
}
