//! Tab bar layout policy
//!
//! Pure functions deciding how the tab bar is laid out on a given device:
//! whether labels sit beside their icons, and how tall the bar is. Every
//! result depends only on the arguments; nothing here holds state.
//!
//! Label placement, first match wins:
//! 1. An explicit `beside-icon` / `below-icon` on the focused route.
//! 2. Tablet-class window: beside icons only if every item fits in the
//!    measured bar width.
//! 3. Phone-class window: beside icons in landscape.

use crate::navigation::{Descriptors, LabelPosition, RouteOptions, TabNavigationState};
use crate::style::StyleFragment;
use crate::tokens::{breakpoints, tab_bar, Breakpoint};
use app_platform::{EdgeInsets, PlatformInfo, WindowDimensions};
use serde::{Deserialize, Serialize};

/// Size of the tab bar's own last rendered box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MeasuredLayout {
    /// Rendered height
    pub height: f32,
    /// Rendered width
    pub width: f32,
}

impl MeasuredLayout {
    /// Create a measurement
    pub fn new(height: f32, width: f32) -> Self {
        Self { height, width }
    }

    /// Measurement before the first layout pass
    pub fn initial(window: WindowDimensions) -> Self {
        Self {
            height: 0.0,
            width: window.width,
        }
    }
}

/// Width an item claims when summing: fixed width, max width, or the default
pub fn item_width(options: &RouteOptions) -> f32 {
    options
        .tab_bar_item_style
        .as_ref()
        .and_then(StyleFragment::claimed_width)
        .unwrap_or(tab_bar::DEFAULT_MAX_ITEM_WIDTH)
}

/// Total width all items need to sit side by side
pub fn total_item_width<'a, I>(items: I) -> f32
where
    I: IntoIterator<Item = &'a RouteOptions>,
{
    items.into_iter().map(item_width).sum()
}

/// Decide whether labels are drawn beside their icons
///
/// `active` are the focused route's options, `items` the options of every
/// route in display order. Tablet-class is decided by the window width, while
/// the fit check compares against the measured bar width, so a narrow bar on a
/// wide window keeps labels below the icons.
pub fn should_use_horizontal_labels<'a, I>(
    active: &RouteOptions,
    items: I,
    viewport: WindowDimensions,
    measured: MeasuredLayout,
) -> bool
where
    I: IntoIterator<Item = &'a RouteOptions>,
{
    match active.tab_bar_label_position {
        Some(LabelPosition::BesideIcon) => return true,
        Some(LabelPosition::BelowIcon) => return false,
        None => {}
    }

    // The width class comes from the window, not the measured bar; only the
    // fit test below reads the bar width.
    match breakpoints::current(viewport.width) {
        Breakpoint::Tablet => total_item_width(items) <= measured.width,
        Breakpoint::Phone => viewport.is_landscape(),
    }
}

/// [`should_use_horizontal_labels`] over navigation state and descriptors
///
/// An out-of-range active index is treated as a route with no options.
pub fn horizontal_labels_for(
    state: &TabNavigationState,
    descriptors: &Descriptors,
    viewport: WindowDimensions,
    measured: MeasuredLayout,
) -> bool {
    let fallback = RouteOptions::default();
    let active = state
        .focused_route()
        .map(|route| descriptors.get(&route.key))
        .unwrap_or(&fallback);

    should_use_horizontal_labels(
        active,
        state.routes.iter().map(|route| descriptors.get(&route.key)),
        viewport,
        measured,
    )
}

/// Bottom padding left after the home indicator takes its share
pub fn padding_bottom(insets: EdgeInsets, platform: PlatformInfo) -> f32 {
    (insets.bottom - platform.home_indicator_inset()).max(0.0)
}

/// Resolve the tab bar height
///
/// A numeric `explicit_height` from the merged style is returned verbatim.
pub fn resolve_tab_bar_height(
    explicit_height: Option<f32>,
    viewport: WindowDimensions,
    insets: EdgeInsets,
    horizontal_labels: bool,
    platform: PlatformInfo,
) -> f32 {
    if let Some(height) = explicit_height {
        return height;
    }

    let padding = padding_bottom(insets, platform);

    if platform.has_compact_landscape() && viewport.is_landscape() && horizontal_labels {
        return tab_bar::COMPACT_HEIGHT + padding;
    }

    tab_bar::DEFAULT_HEIGHT + padding
}

/// Everything the bar needs from the policy for one render
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabBarMetrics {
    /// Resolved bar height
    pub height: f32,
    /// Bottom padding (safe area)
    pub padding_bottom: f32,
    /// Horizontal padding (larger side inset)
    pub padding_horizontal: f32,
    /// Top padding
    pub padding_top: f32,
    /// Labels beside icons
    pub horizontal_labels: bool,
}

/// Device facts plus the bar's own measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    /// Platform identifier
    pub platform: PlatformInfo,
    /// Full window size
    pub viewport: WindowDimensions,
    /// Safe-area insets
    pub insets: EdgeInsets,
    /// Last measurement of the bar
    pub measured: MeasuredLayout,
}

/// Compute all bar metrics for one render
pub fn compute_metrics(
    state: &TabNavigationState,
    descriptors: &Descriptors,
    merged_style: &StyleFragment,
    ctx: &LayoutContext,
) -> TabBarMetrics {
    let horizontal_labels = horizontal_labels_for(state, descriptors, ctx.viewport, ctx.measured);
    let height = resolve_tab_bar_height(
        merged_style.numeric_height(),
        ctx.viewport,
        ctx.insets,
        horizontal_labels,
        ctx.platform,
    );

    TabBarMetrics {
        height,
        padding_bottom: padding_bottom(ctx.insets, ctx.platform),
        padding_horizontal: ctx.insets.horizontal_max(),
        padding_top: tab_bar::PADDING_TOP,
        horizontal_labels,
    }
}
