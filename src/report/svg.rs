use std::fmt::Write;

use crate::model::traits::TraitScores;
use crate::report::format_percent_1;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const BAR_GAP: f64 = 0.2;

/// Bar chart of the five scores on a fixed `[0, 1]` y axis, dark theme.
pub fn render_chart_svg(scores: &TraitScores) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let base_y = MARGIN_TOP + plot_h;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(
        out,
        r##"<rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="#111111"/>"##
    );
    let _ = writeln!(
        out,
        r#"<text x="{}" y="30" fill="white" font-size="18" text-anchor="middle">Big Five Personality Traits</text>"#,
        WIDTH / 2.0
    );

    for tick in 0..=4 {
        let v = tick as f64 * 0.25;
        let y = base_y - v * plot_h;
        let _ = writeln!(
            out,
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#444444" stroke-width="1"/>"##,
            MARGIN_LEFT + plot_w
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" fill="white" font-size="11" text-anchor="end">{v:.2}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0
        );
    }
    let _ = writeln!(
        out,
        r#"<text x="18" y="{:.1}" fill="white" font-size="12" text-anchor="middle" transform="rotate(-90 18 {:.1})">Score (0 - 1)</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    );

    let slot = plot_w / 5.0;
    let bar_w = slot * (1.0 - BAR_GAP);
    for (i, (t, score)) in scores.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot + slot * BAR_GAP / 2.0;
        let h = score.clamp(0.0, 1.0) * plot_h;
        let y = base_y - h;
        let cx = x + bar_w / 2.0;
        let _ = writeln!(
            out,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{}"><title>{}</title></rect>"#,
            t.color(),
            t.name()
        );
        let _ = writeln!(
            out,
            r#"<text x="{cx:.1}" y="{:.1}" fill="white" font-size="12" text-anchor="middle">{}</text>"#,
            (y - 6.0).max(MARGIN_TOP - 4.0),
            format_percent_1(score)
        );
        let _ = writeln!(
            out,
            r#"<text x="{cx:.1}" y="{:.1}" fill="white" font-size="12" text-anchor="middle">{}</text>"#,
            base_y + 20.0,
            t.name()
        );
    }
    let _ = writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" fill="white" font-size="12" text-anchor="middle">Traits</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 12.0
    );
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/svg.rs"]
mod tests;
