//! Stepped pixel `box-shadow` generation.
//!
//! # Scope
//!
//! This crate implements:
//! - **Shadow layers** ([§ 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow))
//!   - Hard-edged layers with equal x/y offsets and zero blur
//!   - Colour passed through as a `var(--dark)` custom property reference
//!
//! - **Shadow lists**
//!   - One layer per pixel, `1px` up to a validated maximum distance
//!   - Serialised as a comma-separated `box-shadow` value
//!
//! - **Interaction states**
//!   - Unhovered (6px), hovered (9px) and active (3px) presets
//!   - Plain-text report of all three
//!
//! # Not Implemented
//!
//! - Parsing existing `box-shadow` values
//! - Resolving custom properties

/// Validated maximum distance.
pub mod distance;
/// Error types.
pub mod error;
/// Plain-text report of the interaction states.
pub mod report;
/// Shadow layer and list values.
pub mod shadow;
/// Interaction state presets.
pub mod state;

// Re-exports for convenience
pub use distance::MaxDistance;
pub use error::{InvalidReason, ShadowError};
pub use report::{render_report, state_block};
pub use shadow::{BoxShadow, CustomProperty, ShadowList, generate, stepped_shadows};
pub use state::InteractionState;
