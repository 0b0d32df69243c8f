//! Navigation model for the tab shell
//!
//! This module provides the types the tab bar exchanges with the navigation
//! collaborator:
//! - Routes and per-route options (descriptors)
//! - Tab navigation state (ordered routes plus the active index)
//! - Tab press / long-press events and navigate requests
//! - The [`Navigator`] trait and a small in-memory implementation

use crate::style::StyleFragment;
use crate::tokens::icons;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Routes
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

/// One navigable tab destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique key for this route instance
    pub key: String,
    /// Route name (screen name)
    pub name: String,
    /// Params currently held by the screen
    #[serde(default)]
    pub params: RouteParams,
}

impl Route {
    /// Create a route with a generated key
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: format!("{}-{}", name, uuid::Uuid::new_v4()),
            name,
            params: RouteParams::new(),
        }
    }

    /// Create a route with an explicit key
    pub fn with_key(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            params: RouteParams::new(),
        }
    }
}

// =============================================================================
// Route Options
// =============================================================================

/// Where a tab label sits relative to its icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelPosition {
    /// Label to the right of the icon
    BesideIcon,
    /// Label under the icon
    BelowIcon,
}

/// Per-route configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptions {
    /// Screen title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Tab label override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar_label: Option<String>,
    /// Tab icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar_icon: Option<String>,
    /// Style of this route's tab item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar_item_style: Option<StyleFragment>,
    /// Style applied to the whole bar while this route is focused
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar_style: Option<StyleFragment>,
    /// Label position preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar_label_position: Option<LabelPosition>,
    /// Accessibility label for the tab item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar_accessibility_label: Option<String>,
    /// Test identifier for the tab item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar_test_id: Option<String>,
    /// Whether the screen draws a header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_shown: Option<bool>,
}

/// Options used for a route with no descriptor
static DEFAULT_ROUTE_OPTIONS: RouteOptions = RouteOptions {
    title: None,
    tab_bar_label: None,
    tab_bar_icon: None,
    tab_bar_item_style: None,
    tab_bar_style: None,
    tab_bar_label_position: None,
    tab_bar_accessibility_label: None,
    tab_bar_test_id: None,
    header_shown: None,
};

impl RouteOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set tab label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.tab_bar_label = Some(label.into());
        self
    }

    /// Set tab icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.tab_bar_icon = Some(icon.into());
        self
    }

    /// Set tab item style
    pub fn with_item_style(mut self, style: StyleFragment) -> Self {
        self.tab_bar_item_style = Some(style);
        self
    }

    /// Set bar style
    pub fn with_tab_bar_style(mut self, style: StyleFragment) -> Self {
        self.tab_bar_style = Some(style);
        self
    }

    /// Set label position
    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.tab_bar_label_position = Some(position);
        self
    }

    /// Set accessibility label
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.tab_bar_accessibility_label = Some(label.into());
        self
    }

    /// Set test id
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.tab_bar_test_id = Some(id.into());
        self
    }

    /// Layer `other` over these options (screen defaults under per-screen options)
    pub fn merged_with(&self, other: &RouteOptions) -> RouteOptions {
        let tab_bar_style = match (&self.tab_bar_style, &other.tab_bar_style) {
            (Some(base), Some(top)) => Some(base.merge(top)),
            (base, top) => top.clone().or_else(|| base.clone()),
        };
        let tab_bar_item_style = match (&self.tab_bar_item_style, &other.tab_bar_item_style) {
            (Some(base), Some(top)) => Some(base.merge(top)),
            (base, top) => top.clone().or_else(|| base.clone()),
        };

        RouteOptions {
            title: other.title.clone().or_else(|| self.title.clone()),
            tab_bar_label: other
                .tab_bar_label
                .clone()
                .or_else(|| self.tab_bar_label.clone()),
            tab_bar_icon: other
                .tab_bar_icon
                .clone()
                .or_else(|| self.tab_bar_icon.clone()),
            tab_bar_item_style,
            tab_bar_style,
            tab_bar_label_position: other
                .tab_bar_label_position
                .or(self.tab_bar_label_position),
            tab_bar_accessibility_label: other
                .tab_bar_accessibility_label
                .clone()
                .or_else(|| self.tab_bar_accessibility_label.clone()),
            tab_bar_test_id: other
                .tab_bar_test_id
                .clone()
                .or_else(|| self.tab_bar_test_id.clone()),
            header_shown: other.header_shown.or(self.header_shown),
        }
    }

    /// Label shown for `route`: tab label, else title, else route name
    pub fn resolve_label(&self, route: &Route) -> String {
        self.tab_bar_label
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| route.name.clone())
    }

    /// Icon shown for a tab with the given label
    pub fn resolve_icon(&self, label: &str) -> String {
        match &self.tab_bar_icon {
            Some(icon) => icon.clone(),
            None if label == "Home" => icons::HOME.to_string(),
            None => icons::DEFAULT.to_string(),
        }
    }
}

/// Route options keyed by route key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Descriptors {
    options: HashMap<String, RouteOptions>,
}

impl Descriptors {
    /// Create an empty descriptor map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register options for a route key
    pub fn insert(&mut self, key: impl Into<String>, options: RouteOptions) {
        self.options.insert(key.into(), options);
    }

    /// Options for a route key; unknown keys get empty options
    pub fn get(&self, key: &str) -> &RouteOptions {
        self.options.get(key).unwrap_or(&DEFAULT_ROUTE_OPTIONS)
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if no descriptors are registered
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl FromIterator<(String, RouteOptions)> for Descriptors {
    fn from_iter<T: IntoIterator<Item = (String, RouteOptions)>>(iter: T) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Ordered tab routes plus the active index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabNavigationState {
    /// Routes in display order
    pub routes: Vec<Route>,
    /// Index of the focused route
    pub index: usize,
}

impl TabNavigationState {
    /// Create navigation state
    pub fn new(routes: Vec<Route>, index: usize) -> Self {
        Self { routes, index }
    }

    /// The focused route; `None` when the index is out of range
    pub fn focused_route(&self) -> Option<&Route> {
        self.routes.get(self.index)
    }

    /// Check if the route at `index` is focused
    pub fn is_focused(&self, index: usize) -> bool {
        self.index == index && index < self.routes.len()
    }

    /// Position of a route by name
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.name == name)
    }
}

// =============================================================================
// Events
// =============================================================================

/// Events the tab bar emits to the navigator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TabEvent {
    /// A tab was pressed
    TabPress {
        /// Key of the pressed route
        target: String,
    },
    /// A tab was long-pressed
    TabLongPress {
        /// Key of the pressed route
        target: String,
    },
}

impl TabEvent {
    /// Key of the route the event targets
    pub fn target(&self) -> &str {
        match self {
            TabEvent::TabPress { target } | TabEvent::TabLongPress { target } => target,
        }
    }

    /// Whether listeners may prevent the default action
    pub fn is_cancelable(&self) -> bool {
        matches!(self, TabEvent::TabPress { .. })
    }
}

/// Result of emitting an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitOutcome {
    /// A listener prevented the default action
    pub default_prevented: bool,
}

/// Request to navigate to a route by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigateRequest {
    /// Target route name
    pub name: String,
    /// Params to pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<RouteParams>,
    /// Merge params into the existing ones instead of replacing them
    #[serde(default)]
    pub merge: bool,
}

impl NavigateRequest {
    /// Navigate keeping the target's current params
    pub fn merge(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
            merge: true,
        }
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// The navigation collaborator the tab bar talks to
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Emit an event to listeners
    fn emit(&mut self, event: TabEvent) -> EmitOutcome;

    /// Request navigation
    fn navigate(&mut self, request: NavigateRequest);
}

/// Listener callback; returning true prevents the default action
pub type EventListener = Box<dyn FnMut(&TabEvent) -> bool>;

/// In-memory tab navigator
pub struct TabNavigator {
    /// Current state
    state: TabNavigationState,
    /// Registered listeners
    listeners: Vec<EventListener>,
}

impl TabNavigator {
    /// Create a navigator over the given routes
    pub fn new(routes: Vec<Route>, initial_index: usize) -> Self {
        Self {
            state: TabNavigationState::new(routes, initial_index),
            listeners: Vec::new(),
        }
    }

    /// Current navigation state
    pub fn state(&self) -> &TabNavigationState {
        &self.state
    }

    /// Register an event listener
    pub fn add_listener(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    /// Replace a route's params
    pub fn set_params(&mut self, name: &str, params: RouteParams) {
        if let Some(route) = self.state.routes.iter_mut().find(|r| r.name == name) {
            route.params = params;
        }
    }
}

impl std::fmt::Debug for TabNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabNavigator")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Navigator for TabNavigator {
    fn emit(&mut self, event: TabEvent) -> EmitOutcome {
        let mut prevented = false;
        for listener in &mut self.listeners {
            prevented |= listener(&event);
        }

        let default_prevented = prevented && event.is_cancelable();
        tracing::trace!(?event, default_prevented, "Emitted tab event");
        EmitOutcome { default_prevented }
    }

    fn navigate(&mut self, request: NavigateRequest) {
        let Some(index) = self.state.position_of(&request.name) else {
            tracing::warn!(name = %request.name, "Navigate to unknown route ignored");
            return;
        };

        let route = &mut self.state.routes[index];
        if let Some(params) = request.params {
            if request.merge {
                route.params.extend(params);
            } else {
                route.params = params;
            }
        } else if !request.merge {
            route.params.clear();
        }

        tracing::debug!(name = %request.name, index, "Switched tab");
        self.state.index = index;
    }
}

// =============================================================================
// Tests
// =============================================================================
