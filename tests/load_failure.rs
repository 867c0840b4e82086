use std::path::Path;

use cohortviz::{
    ChartConfig, ChartError, ChartResult, ChartSession, DataView, LoadError, PlayState,
    RenderSurface, Year,
};

#[derive(Default)]
struct Log {
    renders: Vec<Year>,
    states: Vec<PlayState>,
}

impl RenderSurface for Log {
    fn render(&mut self, year: Year) -> ChartResult<()> {
        self.renders.push(year);
        Ok(())
    }

    fn play_state_changed(&mut self, state: PlayState) -> ChartResult<()> {
        self.states.push(state);
        Ok(())
    }
}

#[test]
fn missing_data_file_fails_without_rendering() {
    let path = Path::new("tests/data/does_not_exist.csv");

    let err = DataView::load(path).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));

    match ChartSession::open(path, ChartConfig::default()) {
        Err(ChartError::Load(LoadError::Io { path: p, .. })) => assert_eq!(p, path),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("session opened over a missing file"),
    }

    // The usual startup path: open, show the first year, play through.
    let mut log = Log::default();
    let outcome = ChartSession::open(path, ChartConfig::default())
        .and_then(|session| session.play_through(&mut log).map(|_| ()));
    assert!(matches!(outcome, Err(ChartError::Load(_))));
    assert!(log.renders.is_empty());
    assert!(log.states.is_empty());
}

#[test]
fn file_without_valid_years_cannot_be_played() {
    let dir = std::path::PathBuf::from("target").join("load_failure");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("no_years.csv");
    std::fs::write(&path, "country,year\nA,\nB,later\n").unwrap();

    let err = ChartSession::open(&path, ChartConfig::default());
    assert!(matches!(err, Err(ChartError::Validation(_))));
}
