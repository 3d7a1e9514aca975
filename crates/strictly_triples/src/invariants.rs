//! Invariants that hold for every session after every accepted move.
//!
//! Each invariant is a named, independently testable property. The
//! session checks the whole set after each move in debug builds.

use super::session::Session;
use super::types::Player;
use tracing::error;

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

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the board has exactly size² cells.
pub struct BoardShapeInvariant;

impl Invariant<Session> for BoardShapeInvariant {
    fn holds(session: &Session) -> bool {
        let size = session.board().size();
        session.board().len() == size * size
    }

    fn description() -> &'static str {
        "Board holds exactly size² cells"
    }
}

/// Invariant: every scored line is fully held by one player.
pub struct ScoredLinesOwnedInvariant;

impl Invariant<Session> for ScoredLinesOwnedInvariant {
    fn holds(session: &Session) -> bool {
        session
            .scored_lines()
            .iter()
            .all(|line| line.owner(session.board()).is_some())
    }

    fn description() -> &'static str {
        "Every scored line is held by a single player"
    }
}

/// Invariant: each player's tally equals the scored lines they own.
pub struct TallyMatchesRegistryInvariant;

impl Invariant<Session> for TallyMatchesRegistryInvariant {
    fn holds(session: &Session) -> bool {
        let owned_by = |player| {
            session
                .scored_lines()
                .iter()
                .filter(|line| line.owner(session.board()) == Some(player))
                .count() as u32
        };
        let tally = session.tally();
        tally.x() == owned_by(Player::X) && tally.o() == owned_by(Player::O)
    }

    fn description() -> &'static str {
        "Tallies match the owners of scored lines"
    }
}

/// All session invariants.
pub type SessionInvariants = (
    BoardShapeInvariant,
    ScoredLinesOwnedInvariant,
    TallyMatchesRegistryInvariant,
);

/// Checks [`SessionInvariants`], logging and (in debug builds)
/// panicking on any violation.
pub(crate) fn assert_invariants(session: &Session) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = SessionInvariants::check_all(session) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(%descriptions, "Session invariant violated");
        panic!("Session invariant violated: {}", descriptions);
    }
}
