
use super::*;

#[test]
fn test_chart_has_one_bar_per_trait() {
    let scores = TraitScores {
        openness: 1.0,
        conscientiousness: 0.0,
        extraversion: 0.41666,
        agreeableness: 0.3745,
        neuroticism: 0.391667,
    };
    let svg = render_chart_svg(&scores);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    for color in ["#1f77b4", "#ff7f0e", "#2ca02c", "#9467bd", "#e377c2"] {
        assert_eq!(svg.matches(&format!("fill=\"{color}\"")).count(), 1);
    }
    assert!(svg.contains(">100.0%<"));
    assert!(svg.contains(">0.0%<"));
    assert!(svg.contains(">41.7%<"));
    assert!(svg.contains("Big Five Personality Traits"));
    assert!(svg.contains(">Neuroticism<"));
}

#[test]
fn test_zero_bar_has_zero_height() {
    let scores = TraitScores {
        openness: 0.0,
        conscientiousness: 0.0,
        extraversion: 0.0,
        agreeableness: 0.0,
        neuroticism: 0.0,
    };
    let svg = render_chart_svg(&scores);
    assert_eq!(svg.matches("height=\"0.0\"").count(), 5);
}
