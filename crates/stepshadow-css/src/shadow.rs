//! Stepped `box-shadow` values
//!
//! [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//!
//! A stepped shadow stacks one hard-edged layer per pixel of offset, so the
//! shadow reads as a staircase instead of a single blurred blob.

use std::fmt;

use serde::Serialize;

use crate::distance::MaxDistance;
use crate::error::ShadowError;

/// [§ 3 Using Cascading Variables](https://www.w3.org/TR/css-variables-1/#using-variables)
///
/// A `var(--name)` reference. The name is emitted verbatim and never resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomProperty(&'static str);

impl CustomProperty {
    /// `var(--dark)`, the colour every stepped layer uses.
    pub const DARK: Self = Self("--dark");

    /// The property name including its leading `--`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CustomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var({})", self.0)
    }
}

/// [§ 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// One shadow layer. Only the subset a stepped shadow needs is modelled:
/// non-negative integer offsets, a blur radius and a colour reference.
/// Spread and `inset` are never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxShadow {
    /// Horizontal offset in px. Positive = right.
    pub offset_x: u32,
    /// Vertical offset in px. Positive = down.
    pub offset_y: u32,
    /// Blur radius in px. Zero for a hard edge.
    pub blur_radius: u32,
    /// Shadow colour.
    pub color: CustomProperty,
}

impl BoxShadow {
    /// A hard-edged layer offset `px` pixels down and to the right.
    #[must_use]
    pub const fn step(px: u32) -> Self {
        Self {
            offset_x: px,
            offset_y: px,
            blur_radius: 0,
            color: CustomProperty::DARK,
        }
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px ", self.offset_x, self.offset_y)?;
        // "0" takes no unit; anything else does.
        if self.blur_radius == 0 {
            f.write_str("0")?;
        } else {
            write!(f, "{}px", self.blur_radius)?;
        }
        write!(f, " {}", self.color)
    }
}

/// Comma-separated list of shadow layers, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShadowList {
    layers: Vec<BoxShadow>,
}

impl ShadowList {
    /// The layers in paint order.
    #[must_use]
    pub fn layers(&self) -> &[BoxShadow] {
        &self.layers
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if the list has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl FromIterator<BoxShadow> for ShadowList {
    fn from_iter<I: IntoIterator<Item = BoxShadow>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ShadowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}

/// One layer per pixel from 1 up to and including `max`.
#[must_use]
pub fn stepped_shadows(max: MaxDistance) -> ShadowList {
    (1..=max.get()).map(BoxShadow::step).collect()
}

/// Render the stepped shadow list for `max_dist` as a `box-shadow` value.
///
/// ```
/// assert_eq!(
///     stepshadow_css::generate(2).unwrap(),
///     "1px 1px 0 var(--dark), 2px 2px 0 var(--dark)"
/// );
/// assert_eq!(stepshadow_css::generate(0).unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns [`ShadowError::InvalidArgument`] if `max_dist` is negative or
/// larger than [`MaxDistance::LIMIT`].
pub fn generate(max_dist: i64) -> Result<String, ShadowError> {
    let max = MaxDistance::try_from(max_dist)?;
    Ok(stepped_shadows(max).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_layer_display() {
        assert_eq!(BoxShadow::step(4).to_string(), "4px 4px 0 var(--dark)");
    }

    #[test]
    fn test_blurred_layer_display() {
        let layer = BoxShadow {
            blur_radius: 2,
            ..BoxShadow::step(1)
        };
        assert_eq!(layer.to_string(), "1px 1px 2px var(--dark)");
    }

    #[test]
    fn test_custom_property() {
        assert_eq!(CustomProperty::DARK.name(), "--dark");
        assert_eq!(CustomProperty::DARK.to_string(), "var(--dark)");
    }

    #[test]
    fn test_stepped_shadows_order() {
        let list = stepped_shadows(MaxDistance::new(3).unwrap());
        let offsets: Vec<u32> = list.layers().iter().map(|l| l.offset_x).collect();
        assert_eq!(offsets, vec![1, 2, 3]);
        assert!(list.layers().iter().all(|l| l.offset_x == l.offset_y));
    }

    #[test]
    fn test_empty_list() {
        let list = stepped_shadows(MaxDistance::new(0).unwrap());
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn test_generate_single() {
        assert_eq!(generate(1).unwrap(), "1px 1px 0 var(--dark)");
    }

    #[test]
    fn test_generate_negative() {
        assert!(generate(-1).is_err());
    }
}
