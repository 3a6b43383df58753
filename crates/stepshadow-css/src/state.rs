//! Interaction states and their shadow depths.

use strum_macros::{Display, EnumIter};

use crate::distance::MaxDistance;
use crate::shadow::{ShadowList, stepped_shadows};

// Evaluated at compile time, so an out-of-range preset fails the build.
const UNHOVERED: MaxDistance = MaxDistance::from_const(6);
const HOVERED: MaxDistance = MaxDistance::from_const(9);
const ACTIVE: MaxDistance = MaxDistance::from_const(3);

/// Visual state of a raised element.
///
/// The shadow grows when the pointer is over the element and shrinks while it
/// is pressed, so the element appears to lift and sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum InteractionState {
    /// Resting.
    Unhovered,
    /// Pointer over the element (`:hover`).
    Hovered,
    /// Being pressed (`:active`).
    Active,
}

impl InteractionState {
    /// Offset of the outermost layer in this state.
    #[must_use]
    pub const fn max_distance(self) -> MaxDistance {
        match self {
            Self::Unhovered => UNHOVERED,
            Self::Hovered => HOVERED,
            Self::Active => ACTIVE,
        }
    }

    /// Heading printed above the state's shadow list, e.g. `Hovered (9px):`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{self} ({}):", self.max_distance())
    }

    /// The stepped shadow list for this state.
    #[must_use]
    pub fn shadows(self) -> ShadowList {
        stepped_shadows(self.max_distance())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_iteration_order() {
        let states: Vec<InteractionState> = InteractionState::iter().collect();
        assert_eq!(
            states,
            vec![
                InteractionState::Unhovered,
                InteractionState::Hovered,
                InteractionState::Active,
            ]
        );
    }

    #[test]
    fn test_preset_distances() {
        assert_eq!(InteractionState::Unhovered.max_distance().get(), 6);
        assert_eq!(InteractionState::Hovered.max_distance().get(), 9);
        assert_eq!(InteractionState::Active.max_distance().get(), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(InteractionState::Unhovered.label(), "Unhovered (6px):");
        assert_eq!(InteractionState::Hovered.label(), "Hovered (9px):");
        assert_eq!(InteractionState::Active.label(), "Active (3px):");
    }

    #[test]
    fn test_hover_is_deepest() {
        let depth = |s: InteractionState| s.shadows().len();
        assert!(depth(InteractionState::Hovered) > depth(InteractionState::Unhovered));
        assert!(depth(InteractionState::Unhovered) > depth(InteractionState::Active));
    }
}
