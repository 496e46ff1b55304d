use log::{debug, info, warn};
use serde::Serialize;

use super::catalog::RewardCatalog;
use super::weighted_random::{weighted_random, UnitSource};
use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEnd {
    SpinLimitReached,
    UserStopped,
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Ready,
    Spinning,
    AwaitingContinue,
    Finished(SessionEnd),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueResponse {
    Continue,
    Stop,
    Unrecognized,
}

const CONTINUE_VOCABULARY: [(&str, ContinueResponse); 4] = [
    ("yes", ContinueResponse::Continue),
    ("y", ContinueResponse::Continue),
    ("no", ContinueResponse::Stop),
    ("n", ContinueResponse::Stop),
];

///
/// Interprets an answer to "spin again?". Case and surrounding whitespace are ignored.
///
pub fn parse_continue(line: &str) -> ContinueResponse {
    let answer = line.trim().to_lowercase();
    CONTINUE_VOCABULARY
        .iter()
        .find(|(word, _)| *word == answer)
        .map_or(ContinueResponse::Unrecognized, |(_, response)| *response)
}

/// Where the session gets its lines from. `None` means the input is exhausted.
pub trait SpinInput {
    fn next_line(&mut self) -> Option<String>;
}

/// Everything the session shows to the player.
pub trait SpinDisplay {
    fn welcome(&mut self, catalog: &RewardCatalog, max_spins: u32);
    fn prompt_spin(&mut self);
    fn show_result(&mut self, result: &SpinResult);
    fn prompt_continue(&mut self);
    fn unrecognized_response(&mut self, response: &str);
    fn spin_limit_reached(&mut self, max_spins: u32);
    fn summary(&mut self, summary: &SessionSummary);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinResult {
    pub spin_number: u32,
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    spins_taken: u32,
    max_spins: u32,
    tally: Vec<u32>,
}

impl SessionState {
    fn new(max_spins: u32, catalog_len: usize) -> Self {
        SessionState {
            spins_taken: 0,
            max_spins,
            tally: vec![0; catalog_len],
        }
    }

    fn record(&mut self, index: usize) {
        self.spins_taken += 1;
        self.tally[index] += 1;
    }

    pub fn spins_taken(&self) -> u32 {
        self.spins_taken
    }

    pub fn max_spins(&self) -> u32 {
        self.max_spins
    }

    pub fn spins_remaining(&self) -> u32 {
        self.max_spins.saturating_sub(self.spins_taken)
    }

    pub fn tally(&self) -> &[u32] {
        &self.tally
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub spins_taken: u32,
    pub max_spins: u32,
    pub end: SessionEnd,
    pub rows: Vec<SummaryRow>,
}

///
/// One player's run at the wheel, from the first spin prompt to the summary.
///
/// The session moves Ready -> Spinning -> AwaitingContinue and back to Ready until
/// the spin cap is hit, the player stops, or the input runs out. Each step is
/// exposed on its own so callers can drive it directly; [`SpinSession::run`]
/// drives the whole loop against an input and a display.
///
pub struct SpinSession<'a> {
    catalog: &'a RewardCatalog,
    state: SessionState,
    phase: SessionPhase,
}

impl<'a> SpinSession<'a> {
    /// `max_spins` is expected to be at least 1; configuration loading enforces it.
    pub fn new(catalog: &'a RewardCatalog, max_spins: u32) -> Self {
        SpinSession {
            catalog,
            state: SessionState::new(max_spins, catalog.len()),
            phase: SessionPhase::Ready,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn transition(&mut self, next: SessionPhase) -> SessionPhase {
        debug!("Session {:?} -> {:?}", self.phase, next);
        self.phase = next;
        next
    }

    fn invalid(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            operation,
            phase: self.phase,
        }
    }

    ///
    /// The player asked for a spin. Finishes the session instead if the cap is reached.
    ///
    pub fn request_spin(&mut self) -> Result<SessionPhase, SessionError> {
        if self.phase != SessionPhase::Ready {
            return Err(self.invalid("request a spin"));
        }
        if self.state.spins_remaining() == 0 {
            info!("Spin limit of {} reached", self.state.max_spins);
            return Ok(self.transition(SessionPhase::Finished(SessionEnd::SpinLimitReached)));
        }
        Ok(self.transition(SessionPhase::Spinning))
    }

    ///
    /// Selects a reward with a single draw from `source` and records it.
    ///
    pub fn complete_spin<S: UnitSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<SpinResult, SessionError> {
        if self.phase != SessionPhase::Spinning {
            return Err(self.invalid("complete a spin"));
        }
        let index = weighted_random(self.catalog, source);
        self.state.record(index);
        let result = SpinResult {
            spin_number: self.state.spins_taken,
            index,
            label: self.catalog.entries()[index].label.clone(),
        };
        debug!(
            "Spin {} landed on {} ({})",
            result.spin_number, result.index, result.label
        );
        self.transition(SessionPhase::AwaitingContinue);
        Ok(result)
    }

    pub fn respond(&mut self, response: ContinueResponse) -> Result<SessionPhase, SessionError> {
        if self.phase != SessionPhase::AwaitingContinue {
            return Err(self.invalid("answer the continue prompt"));
        }
        Ok(match response {
            ContinueResponse::Continue => self.transition(SessionPhase::Ready),
            ContinueResponse::Stop => {
                info!("Player stopped after {} spins", self.state.spins_taken);
                self.transition(SessionPhase::Finished(SessionEnd::UserStopped))
            }
            ContinueResponse::Unrecognized => self.phase,
        })
    }

    /// The input ran out. Treated the same as the player stopping.
    pub fn end_of_input(&mut self) -> Result<SessionPhase, SessionError> {
        if let SessionPhase::Finished(_) = self.phase {
            return Err(self.invalid("end the input"));
        }
        info!("Input closed after {} spins", self.state.spins_taken);
        Ok(self.transition(SessionPhase::Finished(SessionEnd::EndOfInput)))
    }

    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let end = match self.phase {
            SessionPhase::Finished(end) => end,
            _ => return Err(self.invalid("summarise")),
        };
        Ok(SessionSummary {
            spins_taken: self.state.spins_taken,
            max_spins: self.state.max_spins,
            end,
            rows: self
                .catalog
                .entries()
                .iter()
                .zip(&self.state.tally)
                .map(|(entry, wins)| SummaryRow {
                    label: entry.label.clone(),
                    wins: *wins,
                })
                .collect(),
        })
    }

    ///
    /// Plays the session to the end.
    ///
    /// The cap is checked before prompting, so once it is reached the player sees
    /// the limit message rather than another spin prompt.
    ///
    pub fn run<I, D, S>(
        &mut self,
        input: &mut I,
        display: &mut D,
        source: &mut S,
    ) -> Result<SessionSummary, SessionError>
    where
        I: SpinInput + ?Sized,
        D: SpinDisplay + ?Sized,
        S: UnitSource + ?Sized,
    {
        info!(
            "Starting session with {} rewards and {} spins",
            self.catalog.len(),
            self.state.max_spins
        );
        loop {
            match self.phase {
                SessionPhase::Ready => {
                    if self.state.spins_remaining() > 0 {
                        display.prompt_spin();
                        if input.next_line().is_none() {
                            self.end_of_input()?;
                            continue;
                        }
                    }
                    if self.request_spin()? == SessionPhase::Finished(SessionEnd::SpinLimitReached)
                    {
                        display.spin_limit_reached(self.state.max_spins);
                    }
                }
                SessionPhase::Spinning => {
                    let result = self.complete_spin(source)?;
                    display.show_result(&result);
                }
                SessionPhase::AwaitingContinue => {
                    display.prompt_continue();
                    match input.next_line() {
                        None => {
                            self.end_of_input()?;
                        }
                        Some(line) => {
                            let response = parse_continue(&line);
                            if response == ContinueResponse::Unrecognized {
                                warn!("Unrecognized answer {:?}", line.trim());
                                display.unrecognized_response(line.trim());
                            }
                            self.respond(response)?;
                        }
                    }
                }
                SessionPhase::Finished(_) => return self.summary(),
            }
        }
    }
}
