//! Style fragments and merging
//!
//! Styles reach the tab bar from more than one place: the screen options of
//! the focused route and the caller of the bar. Each source contributes a
//! [`StyleFragment`]; fragments are merged left to right and the last one to
//! set a field wins.

use serde::{Deserialize, Serialize};

/// Dimension value (points or a relative expression such as `"50%"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed value in points
    Points(f32),
    /// Anything that is not a plain number (`"50%"`, `"auto"`)
    Relative(String),
}

impl Dimension {
    /// Create a point dimension
    pub fn pt(value: f32) -> Self {
        Dimension::Points(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Relative(format!("{}%", value))
    }

    /// Numeric value, if this is a finite point value
    pub fn as_points(&self) -> Option<f32> {
        match self {
            Dimension::Points(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Points(value)
    }
}

/// Positioning scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Laid out in flow
    #[default]
    Relative,
    /// Floats over the content
    Absolute,
}

/// Overflow behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Children may draw outside the box
    #[default]
    Visible,
    /// Children are clipped
    Hidden,
}

/// A partial style; unset fields defer to earlier fragments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleFragment {
    /// Width constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Maximum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
    /// Height constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Positioning scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Top-left corner radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_left_radius: Option<f32>,
    /// Top-right corner radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_right_radius: Option<f32>,
    /// Overflow behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl StyleFragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set width
    pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set max width
    pub fn with_max_width(mut self, max_width: impl Into<Dimension>) -> Self {
        self.max_width = Some(max_width.into());
        self
    }

    /// Set height
    pub fn with_height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Set position
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Round both top corners
    pub fn with_top_radius(mut self, radius: f32) -> Self {
        self.border_top_left_radius = Some(radius);
        self.border_top_right_radius = Some(radius);
        self
    }

    /// Set overflow
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Layer `other` on top of this fragment
    pub fn merge(&self, other: &StyleFragment) -> StyleFragment {
        StyleFragment {
            width: other.width.clone().or_else(|| self.width.clone()),
            max_width: other.max_width.clone().or_else(|| self.max_width.clone()),
            height: other.height.clone().or_else(|| self.height.clone()),
            position: other.position.or(self.position),
            border_top_left_radius: other
                .border_top_left_radius
                .or(self.border_top_left_radius),
            border_top_right_radius: other
                .border_top_right_radius
                .or(self.border_top_right_radius),
            overflow: other.overflow.or(self.overflow),
            background_color: other
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
        }
    }

    /// Numeric height, if one is set
    pub fn numeric_height(&self) -> Option<f32> {
        self.height.as_ref().and_then(Dimension::as_points)
    }

    /// Width an item claims: numeric width, else numeric max width
    pub fn claimed_width(&self) -> Option<f32> {
        self.width
            .as_ref()
            .and_then(Dimension::as_points)
            .or_else(|| self.max_width.as_ref().and_then(Dimension::as_points))
    }

    /// Check if no field is set
    pub fn is_empty(&self) -> bool {
        *self == StyleFragment::default()
    }
}

/// Merge fragments left to right; later fragments win per field
pub fn merge_styles<'a, I>(fragments: I) -> StyleFragment
where
    I: IntoIterator<Item = &'a StyleFragment>,
{
    fragments
        .into_iter()
        .fold(StyleFragment::default(), |acc, fragment| acc.merge(fragment))
}
