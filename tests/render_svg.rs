use std::path::Path;

use cohortviz::{ChartConfig, ChartSession, Rasterizer};

fn session() -> ChartSession {
    ChartSession::open(Path::new("tests/data/processed_data.csv"), ChartConfig::default()).unwrap()
}

#[test]
fn year_document_has_one_bar_per_country() {
    let svg = session().svg(2000);
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("class=\"bar\"").count(), 3);
    for country in ["Peru", "Brazil", "India"] {
        assert!(svg.contains(&format!("data-country=\"{country}\"")));
    }
    assert!(svg.contains("Country: India"));
}

#[test]
fn out_of_range_frame_clamps_to_last_year() {
    let s = session();
    let year = s.range().clamp(2100);
    assert_eq!(year, 2002);
    assert_eq!(s.frame(year).bars.len(), 3);
}

#[test]
fn rasterized_frame_matches_canvas() {
    let s = session();
    let frame = Rasterizer::new().rasterize(&s.svg(2001)).unwrap();
    assert_eq!(frame.width, 1000);
    assert_eq!(frame.height, 500);
    assert_eq!(frame.data.len(), 1000 * 500 * 4);
    // Top-left corner is background.
    assert_eq!(&frame.data[0..4], &[255, 255, 255, 255]);
}
