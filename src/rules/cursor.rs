//! Pattern cursor: which scripted step a player is on.
//!
//! A player with a pattern starts at step 0. The cursor moves forward by
//! one each time a turn that used a scripted dare ends. When it runs past
//! the last step, the pattern's fallback mode decides what happens:
//!
//! - `loop`: back to step 0, used immediately
//! - `random`/`stop`: the cursor becomes `Exhausted` for good and the
//!   player draws randomly from then on

use crate::cards::{CardPattern, PatternStep};

/// Position in a player's pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepCursor {
    /// Next turn uses this step (may be past the end until resolved).
    At(usize),
    /// Pattern finished without looping. Sticky.
    Exhausted,
}

impl StepCursor {
    /// Cursor for a player who has not used their pattern yet.
    pub const START: StepCursor = StepCursor::At(0);

    /// Step index, unless exhausted.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            StepCursor::At(i) => Some(i),
            StepCursor::Exhausted => None,
        }
    }

    /// Cursor after a scripted turn completes. `Exhausted` stays put.
    #[must_use]
    pub fn advanced(self) -> Self {
        match self {
            StepCursor::At(i) => StepCursor::At(i + 1),
            StepCursor::Exhausted => StepCursor::Exhausted,
        }
    }
}

/// What a cursor means for the turn about to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorResolution<'p> {
    /// Step to script this turn, or `None` for a random draw.
    pub step: Option<&'p PatternStep>,
    /// Cursor to store for the player.
    pub cursor: StepCursor,
}

/// Resolve a player's cursor against their pattern for a new turn.
///
/// An empty pattern scripts nothing and leaves the cursor alone.
///
/// ```
/// use dare_or_dodge::cards::{CardPattern, FallbackMode, PatternStep};
/// use dare_or_dodge::rules::cursor::{resolve, StepCursor};
///
/// let pattern = CardPattern::new("p", "P")
///     .with_step(PatternStep::new("s1", "d1"))
///     .with_fallback(FallbackMode::Loop);
///
/// let res = resolve(StepCursor::At(1), &pattern);
/// assert_eq!(res.cursor, StepCursor::At(0));
/// assert_eq!(res.step.unwrap().id, "s1");
/// ```
#[must_use]
pub fn resolve(cursor: StepCursor, pattern: &CardPattern) -> CursorResolution<'_> {
    if pattern.is_empty() {
        return CursorResolution { step: None, cursor };
    }

    let index = match cursor {
        StepCursor::Exhausted => {
            return CursorResolution {
                step: None,
                cursor: StepCursor::Exhausted,
            }
        }
        StepCursor::At(i) if i >= pattern.len() => {
            if pattern.fallback_mode.restarts() {
                0
            } else {
                return CursorResolution {
                    step: None,
                    cursor: StepCursor::Exhausted,
                };
            }
        }
        StepCursor::At(i) => i,
    };

    CursorResolution {
        step: pattern.step(index),
        cursor: StepCursor::At(index),
    }
}
