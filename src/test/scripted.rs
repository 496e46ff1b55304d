use std::collections::VecDeque;

use crate::wheel::{
    RewardCatalog, SessionSummary, SpinDisplay, SpinInput, SpinResult, UnitSource,
};

///
/// Replays a fixed list of uniform draws in order.
///
/// Panics when asked for more draws than it was given, since that means the
/// selector ran more often than the test expected.
///
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    draws: VecDeque<f64>,
}

impl ScriptedDraws {
    pub fn new(draws: Vec<f64>) -> Self {
        ScriptedDraws {
            draws: draws.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl UnitSource for ScriptedDraws {
    fn next_unit(&mut self) -> f64 {
        match self.draws.pop_front() {
            Some(draw) => draw,
            None => panic!("Scripted draws exhausted"),
        }
    }
}

/// Feeds canned lines to the session, then reports end of input.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        ScriptedInput {
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl SpinInput for ScriptedInput {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Welcome { rewards: usize, max_spins: u32 },
    PromptSpin,
    Result(SpinResult),
    PromptContinue,
    Unrecognized(String),
    SpinLimitReached(u32),
    Summary(SessionSummary),
}

/// Remembers everything it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub events: Vec<DisplayEvent>,
}

impl RecordingDisplay {
    pub fn results(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DisplayEvent::Result(result) => Some(result.label.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: fn(&DisplayEvent) -> bool) -> usize {
        self.events.iter().filter(|event| wanted(event)).count()
    }
}

impl SpinDisplay for RecordingDisplay {
    fn welcome(&mut self, catalog: &RewardCatalog, max_spins: u32) {
        self.events.push(DisplayEvent::Welcome {
            rewards: catalog.len(),
            max_spins,
        });
    }

    fn prompt_spin(&mut self) {
        self.events.push(DisplayEvent::PromptSpin);
    }

    fn show_result(&mut self, result: &SpinResult) {
        self.events.push(DisplayEvent::Result(result.clone()));
    }

    fn prompt_continue(&mut self) {
        self.events.push(DisplayEvent::PromptContinue);
    }

    fn unrecognized_response(&mut self, response: &str) {
        self.events
            .push(DisplayEvent::Unrecognized(response.to_string()));
    }

    fn spin_limit_reached(&mut self, max_spins: u32) {
        self.events.push(DisplayEvent::SpinLimitReached(max_spins));
    }

    fn summary(&mut self, summary: &SessionSummary) {
        self.events.push(DisplayEvent::Summary(summary.clone()));
    }
}
