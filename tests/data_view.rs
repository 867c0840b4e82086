use std::path::Path;

use cohortviz::{DataView, Record, YearRange};

fn fixture() -> DataView {
    DataView::load(Path::new("tests/data/processed_data.csv")).unwrap()
}

#[test]
fn two_rows_in_one_year() {
    let a = Record::new("A", 2000, 10.0, 0.5, 0.1);
    let b = Record::new("B", 2000, 20.0, 0.8, 0.05);
    let view = DataView::from_records(vec![a.clone(), b.clone()]);

    assert_eq!(view.year_range(), Some(YearRange { min: 2000, max: 2000 }));
    assert_eq!(view.rows_for_year(2000), vec![&a, &b]);
    assert!(view.rows_for_year(1999).is_empty());
}

#[test]
fn fixture_loads_with_fallbacks_and_skips_yearless_rows() {
    let view = fixture();
    assert_eq!(view.len(), 9);
    assert_eq!(view.year_range(), Some(YearRange { min: 2000, max: 2002 }));
    assert_eq!(view.years(), vec![2000, 2001, 2002]);

    let y2001 = view.rows_for_year(2001);
    let countries: Vec<_> = y2001.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(countries, vec!["Peru", "Brazil", "India"]);
    assert_eq!(y2001[1].cohort_size, 1.0);
    assert_eq!(y2001[2].completion_rate, 0.0);

    let peru_2002 = view.rows_for_year(2002)[0];
    assert_eq!(peru_2002.failure_rate, 0.0);
    assert!(view.records().iter().all(|r| r.country != "Chad"));
}

#[test]
fn empty_file_has_no_range() {
    let view = DataView::from_reader("country,year,new_sp_coh\n".as_bytes()).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.year_range(), None);
    assert!(view.rows_for_year(2000).is_empty());
}
