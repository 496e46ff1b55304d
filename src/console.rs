//! Console input and output for the wheel.
use std::fmt;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::wheel::{RewardCatalog, SessionSummary, SpinDisplay, SpinInput, SpinResult};

/// Reads one line per prompt. Read errors are treated as the end of input.
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }
}

impl<R: BufRead> SpinInput for LineInput<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                log::warn!("Failed to read input: {}", err);
                None
            }
        }
    }
}

///
/// The "Spinning....." effect shown before each result. Purely cosmetic: it
/// has its own RNG and never touches the draws used to pick the reward.
///
#[derive(Debug, Clone)]
pub struct SpinAnimation {
    pub min_frames: u32,
    pub max_frames: u32,
    pub frame_delay: Duration,
}

impl Default for SpinAnimation {
    fn default() -> Self {
        SpinAnimation {
            min_frames: 10,
            max_frames: 17,
            frame_delay: Duration::from_millis(120),
        }
    }
}

pub struct ConsoleDisplay<W: Write> {
    out: W,
    animation: Option<SpinAnimation>,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W, animation: Option<SpinAnimation>) -> Self {
        ConsoleDisplay { out, animation }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: fmt::Arguments) {
        if let Err(err) = self.out.write_fmt(args).and_then(|_| self.out.flush()) {
            log::warn!("Failed to write output: {}", err);
        }
    }

    fn animate(&mut self) {
        let Some(animation) = self.animation.clone() else {
            return;
        };
        let frames = rand::thread_rng().gen_range(animation.min_frames..=animation.max_frames);
        self.emit(format_args!("\nSpinning"));
        for _ in 0..frames {
            thread::sleep(animation.frame_delay);
            self.emit(format_args!("."));
        }
        self.emit(format_args!("\n"));
    }
}

impl<W: Write> SpinDisplay for ConsoleDisplay<W> {
    fn welcome(&mut self, catalog: &RewardCatalog, max_spins: u32) {
        self.emit(format_args!(
            "========================================\n\
             \x20  VIRTUAL SPIN WHEEL - Spin to Win!\n\
             ========================================\n\
             Press Enter to spin. You can spin up to {} times.\n",
            max_spins
        ));
        self.emit(format_args!("\nAvailable rewards:\n"));
        for (i, entry) in catalog.entries().iter().enumerate() {
            self.emit(format_args!(
                " {}) {:<20} (weight: {:.1})\n",
                i + 1,
                entry.label,
                entry.weight
            ));
        }
    }

    fn prompt_spin(&mut self) {
        self.emit(format_args!("\nPress Enter to spin the wheel..."));
    }

    fn show_result(&mut self, result: &SpinResult) {
        self.animate();
        self.emit(format_args!(
            "\n--- RESULT (spin {}) ---\nYou won: {}\n",
            result.spin_number, result.label
        ));
    }

    fn prompt_continue(&mut self) {
        self.emit(format_args!("\nDo you want to spin again? (yes/no): "));
    }

    fn unrecognized_response(&mut self, _response: &str) {
        self.emit(format_args!("Please enter 'yes' or 'no'.\n"));
    }

    fn spin_limit_reached(&mut self, max_spins: u32) {
        self.emit(format_args!(
            "\nYou've reached the maximum number of spins for this session ({}).\n",
            max_spins
        ));
    }

    fn summary(&mut self, summary: &SessionSummary) {
        self.emit(format_args!(
            "\n==============================\n\
             Thank you for playing!\n\
             Total spins: {}\n\
             Rewards summary:\n",
            summary.spins_taken
        ));
        for row in &summary.rows {
            self.emit(format_args!(" - {:<20} : {}\n", row.label, row.wins));
        }
        self.emit(format_args!("==============================\n"));
    }
}
