use std::time::Duration;

use cohortviz::{
    ChartResult, PlayState, RenderSurface, TimelineController, TimelineOpts, Year, YearRange,
};

#[derive(Default)]
struct Log {
    years: Vec<Year>,
    labels: Vec<&'static str>,
}

impl RenderSurface for Log {
    fn render(&mut self, year: Year) -> ChartResult<()> {
        self.years.push(year);
        Ok(())
    }

    fn play_state_changed(&mut self, state: PlayState) -> ChartResult<()> {
        self.labels.push(state.button_label());
        Ok(())
    }
}

fn controller() -> TimelineController<Log> {
    TimelineController::new(
        YearRange::new(2000, 2002).unwrap(),
        Log::default(),
        TimelineOpts::default(),
    )
}

#[test]
fn play_from_first_year_renders_each_year_then_stops() {
    let mut c = controller();
    assert_eq!(c.state(), PlayState::Paused);
    assert_eq!(c.current_year(), 2000);

    c.toggle_play().unwrap();
    let step = Duration::from_millis(500);
    for _ in 0..3 {
        assert_eq!(c.advance(step).unwrap(), 1);
    }
    assert_eq!(c.surface().years, vec![2000, 2001, 2002]);
    assert_eq!(c.state(), PlayState::Playing);

    // The stop happens on the tick after the last render.
    assert_eq!(c.advance(step).unwrap(), 1);
    assert_eq!(c.state(), PlayState::Paused);
    assert_eq!(c.current_year(), 2003);
    assert_eq!(c.surface().years, vec![2000, 2001, 2002]);
    assert_eq!(c.surface().labels, vec!["Pause", "Play"]);

    assert_eq!(c.advance(Duration::from_secs(10)).unwrap(), 0);
}

#[test]
fn slider_input_clamps_and_renders_immediately() {
    let mut c = controller();
    c.set_year(1990).unwrap();
    c.set_year(2050).unwrap();
    c.set_year_value(2000.6).unwrap();
    assert_eq!(c.surface().years, vec![2000, 2002, 2001]);
    assert_eq!(c.current_year(), 2001);
}

#[test]
fn pausing_mid_run_keeps_position() {
    let mut c = controller();
    c.toggle_play().unwrap();
    c.advance(Duration::from_millis(500)).unwrap();
    c.toggle_play().unwrap();
    assert_eq!(c.state(), PlayState::Paused);
    assert_eq!(c.current_year(), 2001);
    assert_eq!(c.time_until_next_tick(), None);
    assert_eq!(c.advance(Duration::from_secs(5)).unwrap(), 0);
    assert_eq!(c.surface().years, vec![2000]);
}
