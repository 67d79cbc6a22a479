//! First-class invariants over the move history.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked in debug builds and can be tested
//! independently.

use super::Game;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod cursor_in_range;
pub mod single_step;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use single_step::SingleStepInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    SingleStepInvariant,
    AlternatingTurnInvariant,
    CursorInRangeInvariant,
);

/// Asserts that all history invariants hold (panics on violation in debug builds).
#[instrument(level = "trace", skip(game))]
pub fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = HistoryInvariants::check_all(game)
    {
        warn!(?violations, "History invariants violated");
        panic!("History invariants violated: {:?}", violations);
    }
}
