//! The prize wheel itself: the reward catalog, weighted selection over it, and
//! the session that bounds a run of spins.
pub mod catalog;
pub mod session;
pub mod weighted_random;

pub use catalog::{CatalogEntry, RewardCatalog};
pub use session::{
    parse_continue, ContinueResponse, SessionEnd, SessionPhase, SessionState, SessionSummary,
    SpinDisplay, SpinInput, SpinResult, SpinSession, SummaryRow,
};
pub use weighted_random::{weighted_random, RngSource, UnitSource};
