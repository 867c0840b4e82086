use std::str::FromStr;

use crate::foundation::error::ChartError;

/// User input accepted by the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// Jump to a year (clamped).
    SetYear(i64),
    /// Raw slider value.
    Scrub(f64),
    TogglePlay,
    Play,
    Pause,
    Quit,
}

impl FromStr for Input {
    type Err = ChartError;

    /// Accepts `play`, `pause`, `toggle` (or `t`, `space`), `quit` (or `q`, `exit`),
    /// `year <n>` and a bare number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(ChartError::validation(format!("unexpected input \"{line}\"")));
        }

        match (head.as_str(), arg) {
            ("play", None) => Ok(Self::Play),
            ("pause", None) => Ok(Self::Pause),
            ("toggle" | "t" | "space", None) => Ok(Self::TogglePlay),
            ("quit" | "q" | "exit", None) => Ok(Self::Quit),
            ("year" | "y", Some(v)) => parse_year(v),
            (v, None) if !v.is_empty() => parse_year(v),
            _ => Err(ChartError::validation(format!("unknown input \"{line}\""))),
        }
    }
}

fn parse_year(v: &str) -> Result<Input, ChartError> {
    if let Ok(year) = v.parse::<i64>() {
        return Ok(Input::SetYear(year));
    }
    v.parse::<f64>()
        .map(Input::Scrub)
        .map_err(|_| ChartError::validation(format!("not a year: \"{v}\"")))
}
