//! Effects declared by the reducer and executed by the dispatch loop.

use crate::state::Coordinates;

/// Side effects the reducer can request.
///
/// Effects are descriptions of work, not the work itself; the dispatch
/// loop decides how to execute them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Launch the compound fetch with the coordinate snapshot taken at
    /// trigger time.
    FetchReadings { coords: Coordinates },
}

/// Result of running one action through the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchResult {
    /// Whether the state was modified.
    pub changed: bool,
    /// Effects to execute after dispatch.
    pub effects: Vec<Effect>,
}

impl Default for DispatchResult {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl DispatchResult {
    /// No state change and no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// True if there are effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}
