//! User interface for the tab shell
//!
//! This crate provides the UI layer: the adaptive bottom tab bar, the
//! navigation model it talks to, style fragments, design tokens and the two
//! application screens.
//!
//! # Modules
//!
//! - [`layout`] - Tab bar layout policy (label placement, bar height)
//! - [`tab_bar`] - Headless tab bar view
//! - [`navigation`] - Routes, route options, tab events, navigator
//! - [`style`] - Style fragments and merging
//! - [`tokens`] - Design tokens (tab bar constants, breakpoints, colors)
//! - [`screens`] - Home and gallery screens
//!
//! # Example
//!
//! ```rust
//! use app_platform::{DeviceFacts, EdgeInsets, PlatformInfo, WindowDimensions};
//! use app_ui::navigation::{Descriptors, Route, RouteOptions, TabNavigationState};
//! use app_ui::tab_bar::{TabBarConfig, TabBarView};
//!
//! let device = DeviceFacts::new(
//!     PlatformInfo::ios_phone(),
//!     WindowDimensions::new(800.0, 400.0),
//!     EdgeInsets::bottom(20.0),
//! );
//! let home = Route::new("HOME");
//! let mut descriptors = Descriptors::new();
//! descriptors.insert(home.key.clone(), RouteOptions::new().with_title("Home"));
//! let state = TabNavigationState::new(vec![home], 0);
//!
//! let view = TabBarView::new(device.window, TabBarConfig::new());
//! let bar = view.render(&state, &descriptors, &device);
//! assert_eq!(bar.metrics.height, 48.0);
//! assert!(bar.metrics.horizontal_labels);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod layout;
pub mod navigation;
pub mod screens;
pub mod style;
pub mod tab_bar;
pub mod tokens;

// Re-export commonly used types
pub use layout::{
    compute_metrics, padding_bottom, resolve_tab_bar_height, should_use_horizontal_labels,
    LayoutContext, MeasuredLayout, TabBarMetrics,
};

pub use navigation::{
    Descriptors, EmitOutcome, EventListener, LabelPosition, NavigateRequest, Navigator, Route,
    RouteOptions, RouteParams, TabEvent, TabNavigationState, TabNavigator,
};

pub use style::{merge_styles, Dimension, Overflow, Position, StyleFragment};

pub use tab_bar::{
    HeightCallback, PressOutcome, RenderedTabBar, TabBarConfig, TabBarView, TabItem,
};
