use super::*;
use crate::foundation::error::ChartError;

#[derive(Debug, Default)]
struct Recording {
    renders: Vec<Year>,
    states: Vec<PlayState>,
}

impl RenderSurface for Recording {
    fn render(&mut self, year: Year) -> ChartResult<()> {
        self.renders.push(year);
        Ok(())
    }

    fn play_state_changed(&mut self, state: PlayState) -> ChartResult<()> {
        self.states.push(state);
        Ok(())
    }
}

const STEP: Duration = Duration::from_millis(500);

fn controller(min: Year, max: Year) -> TimelineController<Recording> {
    TimelineController::new(
        YearRange::new(min, max).unwrap(),
        Recording::default(),
        TimelineOpts::default(),
    )
}

#[test]
fn starts_paused_at_first_year_without_rendering() {
    let c = controller(2000, 2002);
    assert_eq!(c.state(), PlayState::Paused);
    assert_eq!(c.current_year(), 2000);
    assert!(c.surface().renders.is_empty());
    assert_eq!(c.time_until_next_tick(), None);
}

#[test]
fn set_year_clamps_and_renders_synchronously() {
    let mut c = controller(2000, 2010);
    c.set_year(1_000_000).unwrap();
    assert_eq!(c.current_year(), 2010);
    c.set_year(i64::MIN).unwrap();
    assert_eq!(c.current_year(), 2000);
    c.set_year(2004).unwrap();
    assert_eq!(c.current_year(), 2004);
    assert_eq!(c.surface().renders, vec![2010, 2000, 2004]);
    assert_eq!(c.state(), PlayState::Paused);
}

#[test]
fn raw_slider_values_are_rounded_and_clamped() {
    let mut c = controller(2000, 2010);
    c.set_year_value(2003.6).unwrap();
    assert_eq!(c.current_year(), 2004);
    c.set_year_value(f64::INFINITY).unwrap();
    assert_eq!(c.current_year(), 2010);
    c.set_year_value(f64::NAN).unwrap();
    assert_eq!(c.current_year(), 2000);
}

#[test]
fn double_toggle_returns_to_paused_with_no_timer() {
    let mut c = controller(2000, 2002);
    c.toggle_play().unwrap();
    c.toggle_play().unwrap();
    assert!(!c.is_playing());
    assert_eq!(c.time_until_next_tick(), None);
    assert_eq!(c.advance(STEP * 10).unwrap(), 0);
    assert!(c.surface().renders.is_empty());
    assert_eq!(
        c.surface().states,
        vec![PlayState::Playing, PlayState::Paused]
    );
}

#[test]
fn playback_renders_each_year_then_stops_one_tick_later() {
    let mut c = controller(2000, 2002);
    c.toggle_play().unwrap();
    assert_eq!(c.time_until_next_tick(), Some(STEP));

    for _ in 0..3 {
        assert_eq!(c.advance(STEP).unwrap(), 1);
    }
    assert_eq!(c.surface().renders, vec![2000, 2001, 2002]);
    assert_eq!(c.current_year(), 2003);
    assert!(c.is_playing());

    assert_eq!(c.advance(STEP).unwrap(), 1);
    assert_eq!(c.state(), PlayState::Paused);
    assert_eq!(c.current_year(), 2003);
    assert_eq!(c.surface().renders, vec![2000, 2001, 2002]);
    assert_eq!(
        c.surface().states,
        vec![PlayState::Playing, PlayState::Paused]
    );
}

#[test]
fn one_large_advance_fires_due_ticks_in_order_and_drops_the_rest() {
    let mut c = controller(2000, 2001);
    c.toggle_play().unwrap();
    assert_eq!(c.advance(STEP * 20).unwrap(), 3);
    assert_eq!(c.surface().renders, vec![2000, 2001]);
    assert!(!c.is_playing());
    assert_eq!(c.now(), STEP * 20);
}

#[test]
fn partial_period_does_not_tick() {
    let mut c = controller(2000, 2001);
    c.toggle_play().unwrap();
    assert_eq!(c.advance(Duration::from_millis(499)).unwrap(), 0);
    assert_eq!(c.time_until_next_tick(), Some(Duration::from_millis(1)));
    assert_eq!(c.advance(Duration::from_millis(1)).unwrap(), 1);
}

#[test]
fn play_after_running_off_the_end_rewinds() {
    let mut c = controller(2000, 2001);
    c.toggle_play().unwrap();
    c.run_until_paused().unwrap();
    assert_eq!(c.current_year(), 2002);

    c.toggle_play().unwrap();
    assert_eq!(c.current_year(), 2000);
    c.advance(STEP).unwrap();
    assert_eq!(c.surface().renders, vec![2000, 2001, 2000]);
}

#[test]
fn scrubbing_while_playing_moves_the_playhead() {
    let mut c = controller(2000, 2005);
    c.toggle_play().unwrap();
    c.advance(STEP).unwrap();
    c.set_year(2004).unwrap();
    assert!(c.is_playing());
    c.advance(STEP).unwrap();
    assert_eq!(c.surface().renders, vec![2000, 2004, 2004]);
    assert_eq!(c.current_year(), 2005);
}

#[test]
fn play_and_pause_are_idempotent() {
    let mut c = controller(2000, 2005);
    c.play().unwrap();
    c.play().unwrap();
    assert_eq!(c.surface().states, vec![PlayState::Playing]);
    c.pause().unwrap();
    c.pause().unwrap();
    c.shutdown().unwrap();
    assert_eq!(
        c.surface().states,
        vec![PlayState::Playing, PlayState::Paused]
    );
}

#[test]
fn single_year_range_plays_once() {
    let mut c = controller(1999, 1999);
    c.toggle_play().unwrap();
    assert_eq!(c.run_until_paused().unwrap(), 2);
    assert_eq!(c.surface().renders, vec![1999]);
}

#[test]
fn surface_errors_propagate_without_corrupting_state() {
    struct Failing;
    impl RenderSurface for Failing {
        fn render(&mut self, _year: Year) -> ChartResult<()> {
            Err(ChartError::render("disk full"))
        }
    }

    let mut c = TimelineController::new(
        YearRange::new(2000, 2001).unwrap(),
        Failing,
        TimelineOpts::default(),
    );
    c.toggle_play().unwrap();
    assert!(c.advance(STEP).is_err());
    assert_eq!(c.current_year(), 2000);
    assert!(c.is_playing());
}

#[test]
fn button_label_names_the_next_action() {
    assert_eq!(PlayState::Paused.button_label(), "Play");
    assert_eq!(PlayState::Playing.button_label(), "Pause");
}
