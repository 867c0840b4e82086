use std::fmt::Write as _;

use crate::chart::layout::ChartFrame;
use crate::config::ChartConfig;

/// Serialize a chart frame as a standalone SVG document.
///
/// Each bar carries its hover detail as a `<title>` child, which viewers show as a tooltip.
pub fn write_svg(frame: &ChartFrame, cfg: &ChartConfig) -> String {
    let w = frame.canvas.width;
    let h = frame.canvas.height;
    let mut out = String::with_capacity(256 + frame.bars.len() * 256);

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect class="background" x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        cfg.background.to_hex()
    );

    let _ = writeln!(out, r#"  <g class="bars">"#);
    for bar in &frame.bars {
        let r = bar.rect;
        let _ = writeln!(
            out,
            r#"    <rect class="bar" data-country="{}" x="{}" y="{}" width="{}" height="{}" fill="{}"><title>{}</title></rect>"#,
            escape_xml(&bar.country),
            num(r.x0),
            num(r.y0),
            num(r.width().max(0.0)),
            num(r.height().max(0.0)),
            bar.fill.to_hex(),
            escape_xml(&bar.detail),
        );
    }
    let _ = writeln!(out, "  </g>");

    if cfg.show_year_label {
        let _ = writeln!(
            out,
            r##"  <text class="year-label" x="{}" y="48" text-anchor="end" font-family="sans-serif" font-size="36" fill="#4a4a4a">{}</text>"##,
            w.saturating_sub(24),
            frame.year
        );
    }

    out.push_str("</svg>\n");
    out
}

fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#10;"),
            c => out.push(c),
        }
    }
    out
}
