//! Bottom tab bar view
//!
//! [`TabBarView`] is headless: it owns the bar's last measurement, turns the
//! current navigation state and device facts into a [`RenderedTabBar`] the
//! frontend draws, and forwards presses to a [`Navigator`].
//!
//! Selection is never stored here. An item is selected exactly when its
//! index equals the navigation state's active index.

use crate::layout::{compute_metrics, LayoutContext, MeasuredLayout, TabBarMetrics};
use crate::navigation::{
    Descriptors, LabelPosition, NavigateRequest, Navigator, TabEvent, TabNavigationState,
};
use crate::style::{merge_styles, StyleFragment};
use crate::tokens::{blur, colors, tab_bar, BlurType};
use app_platform::{DeviceFacts, WindowDimensions};
use serde::{Deserialize, Serialize};

/// Callback receiving the bar's measured height
pub type HeightCallback = Box<dyn Fn(f32)>;

/// Caller-side configuration of the bar
#[derive(Default)]
pub struct TabBarConfig {
    /// Subscriber told about every measured height change
    pub on_height_change: Option<HeightCallback>,
    /// Caller style, applied over the focused screen's bar style
    pub style: Option<StyleFragment>,
}

impl TabBarConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the height subscriber
    pub fn on_height_change(mut self, callback: impl Fn(f32) + 'static) -> Self {
        self.on_height_change = Some(Box::new(callback));
        self
    }

    /// Set the caller style
    pub fn with_style(mut self, style: StyleFragment) -> Self {
        self.style = Some(style);
        self
    }
}

impl std::fmt::Debug for TabBarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabBarConfig")
            .field("on_height_change", &self.on_height_change.is_some())
            .field("style", &self.style)
            .finish()
    }
}

/// One rendered tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItem {
    /// Route key
    pub key: String,
    /// Route name
    pub route_name: String,
    /// Label text
    pub label: String,
    /// Icon name
    pub icon: String,
    /// Icon and label tint
    pub tint: String,
    /// Icon size
    pub icon_size: f32,
    /// Label placement
    pub label_position: LabelPosition,
    /// Flex share of the bar width
    pub flex: f32,
    /// Whether this tab is the focused route
    pub selected: bool,
    /// Accessibility role
    pub accessibility_role: String,
    /// Accessibility label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Test identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

/// A full render of the bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedTabBar {
    /// Height and paddings
    pub metrics: TabBarMetrics,
    /// Merged screen + caller style, applied after the computed style
    pub style: StyleFragment,
    /// Background blur material
    pub blur_type: BlurType,
    /// Background blur amount
    pub blur_amount: f32,
    /// Elevation
    pub elevation: f32,
    /// Accessibility role of the item row
    pub accessibility_role: String,
    /// Tabs in route order
    pub items: Vec<TabItem>,
}

impl RenderedTabBar {
    /// The selected item, if any
    pub fn selected(&self) -> Option<&TabItem> {
        self.items.iter().find(|item| item.selected)
    }

    /// Number of selected items (zero or one)
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }

    /// Serialize for the frontend
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// What a primary press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Navigation to the tab was requested
    Navigated,
    /// The tab was already focused
    AlreadyFocused,
    /// A listener prevented the default action
    Prevented,
    /// No route at that index
    Ignored,
}

/// The tab bar component
#[derive(Debug)]
pub struct TabBarView {
    /// Last measurement of the bar
    layout: MeasuredLayout,
    /// Bumped on every real measurement change
    layout_version: u64,
    /// Caller configuration
    config: TabBarConfig,
}

impl TabBarView {
    /// Create a bar for the given window
    pub fn new(window: WindowDimensions, config: TabBarConfig) -> Self {
        Self {
            layout: MeasuredLayout::initial(window),
            layout_version: 0,
            config,
        }
    }

    /// Last measurement
    pub fn measured(&self) -> MeasuredLayout {
        self.layout
    }

    /// Measurement version
    pub fn layout_version(&self) -> u64 {
        self.layout_version
    }

    /// Handle a layout pass. Returns true if the measurement changed.
    ///
    /// Non-finite measurements are ignored.
    pub fn handle_layout(&mut self, height: f32, width: f32) -> bool {
        if !height.is_finite() || !width.is_finite() {
            tracing::warn!(height, width, "Ignoring non-finite tab bar measurement");
            return false;
        }
        if height == self.layout.height && width == self.layout.width {
            return false;
        }

        let height_changed = height != self.layout.height;
        self.layout = MeasuredLayout::new(height, width);
        self.layout_version += 1;
        tracing::debug!(height, width, version = self.layout_version, "Tab bar measured");

        if height_changed {
            if let Some(callback) = &self.config.on_height_change {
                callback(height);
            }
        }
        true
    }

    /// Screen style of the focused route merged with the caller style
    pub fn merged_style(
        &self,
        state: &TabNavigationState,
        descriptors: &Descriptors,
    ) -> StyleFragment {
        let screen = state
            .focused_route()
            .and_then(|route| descriptors.get(&route.key).tab_bar_style.as_ref());
        merge_styles(screen.into_iter().chain(self.config.style.as_ref()))
    }

    /// Produce the bar for the current state and device
    pub fn render(
        &self,
        state: &TabNavigationState,
        descriptors: &Descriptors,
        device: &DeviceFacts,
    ) -> RenderedTabBar {
        let style = self.merged_style(state, descriptors);
        let ctx = LayoutContext {
            platform: device.platform,
            viewport: device.window,
            insets: device.insets,
            measured: self.layout,
        };
        let metrics = compute_metrics(state, descriptors, &style, &ctx);
        let label_position = if metrics.horizontal_labels {
            LabelPosition::BesideIcon
        } else {
            LabelPosition::BelowIcon
        };

        let items = state
            .routes
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let options = descriptors.get(&route.key);
                let label = options.resolve_label(route);
                let selected = state.is_focused(index);
                TabItem {
                    key: route.key.clone(),
                    route_name: route.name.clone(),
                    icon: options.resolve_icon(&label),
                    label,
                    tint: if selected {
                        colors::TAB_ACTIVE
                    } else {
                        colors::TAB_INACTIVE
                    }
                    .to_string(),
                    icon_size: tab_bar::ICON_SIZE,
                    label_position,
                    flex: tab_bar::ITEM_FLEX,
                    selected,
                    accessibility_role: "button".to_string(),
                    accessibility_label: options.tab_bar_accessibility_label.clone(),
                    test_id: options.tab_bar_test_id.clone(),
                }
            })
            .collect();

        RenderedTabBar {
            metrics,
            style,
            blur_type: BlurType::for_platform(&device.platform),
            blur_amount: blur::TAB_BAR,
            elevation: tab_bar::ELEVATION,
            accessibility_role: "tablist".to_string(),
            items,
        }
    }

    /// Primary activation of the tab at `index`
    pub fn press(
        &self,
        state: &TabNavigationState,
        index: usize,
        navigator: &mut dyn Navigator,
    ) -> PressOutcome {
        let Some(route) = state.routes.get(index) else {
            return PressOutcome::Ignored;
        };

        let outcome = navigator.emit(TabEvent::TabPress {
            target: route.key.clone(),
        });

        if outcome.default_prevented {
            PressOutcome::Prevented
        } else if state.is_focused(index) {
            PressOutcome::AlreadyFocused
        } else {
            navigator.navigate(NavigateRequest::merge(route.name.clone()));
            PressOutcome::Navigated
        }
    }

    /// Secondary (long) activation of the tab at `index`
    pub fn long_press(
        &self,
        state: &TabNavigationState,
        index: usize,
        navigator: &mut dyn Navigator,
    ) {
        if let Some(route) = state.routes.get(index) {
            navigator.emit(TabEvent::TabLongPress {
                target: route.key.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{EmitOutcome, MockNavigator, Route, RouteOptions};
    use app_platform::{EdgeInsets, PlatformInfo};
    use mockall::predicate::eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn state(index: usize) -> TabNavigationState {
        TabNavigationState::new(
            vec![
                Route::with_key("home-1", "HOME"),
                Route::with_key("galery-1", "GALERY"),
            ],
            index,
        )
    }

    fn descriptors() -> Descriptors {
        let mut descriptors = Descriptors::new();
        descriptors.insert("home-1", RouteOptions::new().with_title("Home"));
        descriptors.insert(
            "galery-1",
            RouteOptions::new()
                .with_title("Galery")
                .with_accessibility_label("Open gallery")
                .with_test_id("tab-galery"),
        );
        descriptors
    }

    fn phone() -> DeviceFacts {
        DeviceFacts::new(
            PlatformInfo::ios_phone(),
            WindowDimensions::new(400.0, 800.0),
            EdgeInsets::bottom(20.0),
        )
    }

    #[test]
    fn test_initial_measurement() {
        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        assert_eq!(view.measured(), MeasuredLayout::new(0.0, 400.0));
        assert_eq!(view.layout_version(), 0);
    }

    #[test]
    fn test_identical_measurement_is_noop() {
        let heights = Rc::new(RefCell::new(Vec::new()));
        let sink = heights.clone();
        let mut view = TabBarView::new(
            WindowDimensions::new(400.0, 800.0),
            TabBarConfig::new().on_height_change(move |h| sink.borrow_mut().push(h)),
        );

        assert!(view.handle_layout(71.0, 400.0));
        let version = view.layout_version();
        assert!(!view.handle_layout(71.0, 400.0));

        assert_eq!(view.layout_version(), version);
        assert_eq!(*heights.borrow(), vec![71.0]);
    }

    #[test]
    fn test_width_only_change_does_not_notify() {
        let heights = Rc::new(RefCell::new(Vec::new()));
        let sink = heights.clone();
        let mut view = TabBarView::new(
            WindowDimensions::new(400.0, 800.0),
            TabBarConfig::new().on_height_change(move |h| sink.borrow_mut().push(h)),
        );

        view.handle_layout(71.0, 400.0);
        assert!(view.handle_layout(71.0, 800.0));
        assert_eq!(view.measured().width, 800.0);
        assert_eq!(view.layout_version(), 2);
        assert_eq!(*heights.borrow(), vec![71.0]);
    }

    #[test]
    fn test_non_finite_measurement_ignored() {
        let heights = Rc::new(RefCell::new(Vec::new()));
        let sink = heights.clone();
        let mut view = TabBarView::new(
            WindowDimensions::new(400.0, 800.0),
            TabBarConfig::new().on_height_change(move |h| sink.borrow_mut().push(h)),
        );

        assert!(!view.handle_layout(f32::NAN, 400.0));
        assert!(!view.handle_layout(f32::NAN, 400.0));
        assert!(!view.handle_layout(71.0, f32::INFINITY));

        assert_eq!(view.layout_version(), 0);
        assert_eq!(view.measured(), MeasuredLayout::new(0.0, 400.0));
        assert!(heights.borrow().is_empty());
    }

    #[test]
    fn test_no_subscriber_is_silent() {
        let mut view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        assert!(view.handle_layout(48.0, 800.0));
    }

    #[test]
    fn test_render_portrait_phone() {
        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        let bar = view.render(&state(0), &descriptors(), &phone());

        assert_eq!(bar.metrics.height, 71.0);
        assert_eq!(bar.metrics.padding_bottom, 16.0);
        assert!(!bar.metrics.horizontal_labels);
        assert_eq!(bar.blur_type, BlurType::UltraThinMaterialLight);
        assert_eq!(bar.accessibility_role, "tablist");
        assert_eq!(bar.items.len(), 2);

        let home = &bar.items[0];
        assert_eq!(home.label, "Home");
        assert_eq!(home.icon, "home");
        assert!(home.selected);
        assert_eq!(home.tint, colors::TAB_ACTIVE);
        assert_eq!(home.label_position, LabelPosition::BelowIcon);

        let galery = &bar.items[1];
        assert_eq!(galery.icon, "laptop");
        assert!(!galery.selected);
        assert_eq!(galery.tint, colors::TAB_INACTIVE);
        assert_eq!(galery.accessibility_label.as_deref(), Some("Open gallery"));
        assert_eq!(galery.test_id.as_deref(), Some("tab-galery"));
    }

    #[test]
    fn test_render_landscape_phone_is_compact() {
        let mut device = phone();
        device.set_window(WindowDimensions::new(800.0, 400.0));
        let view = TabBarView::new(device.window, TabBarConfig::new());

        let bar = view.render(&state(1), &descriptors(), &device);
        assert_eq!(bar.metrics.height, 48.0);
        assert!(bar.items.iter().all(|i| i.label_position == LabelPosition::BesideIcon));
    }

    #[test]
    fn test_caller_style_height_wins_over_screen() {
        let mut descriptors = descriptors();
        descriptors.insert(
            "home-1",
            RouteOptions::new()
                .with_title("Home")
                .with_tab_bar_style(StyleFragment::new().with_height(60.0)),
        );

        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        assert_eq!(view.render(&state(0), &descriptors, &phone()).metrics.height, 60.0);

        let view = TabBarView::new(
            WindowDimensions::new(400.0, 800.0),
            TabBarConfig::new().with_style(StyleFragment::new().with_height(90.0)),
        );
        assert_eq!(view.render(&state(0), &descriptors, &phone()).metrics.height, 90.0);
    }

    #[test]
    fn test_exactly_one_selected() {
        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        for index in 0..2 {
            let bar = view.render(&state(index), &descriptors(), &phone());
            assert_eq!(bar.selected_count(), 1);
            let expected = state(index).routes[index].key.clone();
            assert_eq!(bar.selected().map(|i| i.key.clone()), Some(expected));
        }
    }

    #[test]
    fn test_out_of_range_selection_renders_nothing_selected() {
        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        let bar = view.render(&state(9), &descriptors(), &phone());
        assert_eq!(bar.items.len(), 2);
        assert_eq!(bar.selected_count(), 0);
        assert_eq!(bar.metrics.height, 71.0);
    }

    #[test]
    fn test_press_unfocused_navigates_with_merge() {
        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        let mut navigator = MockNavigator::new();
        navigator
            .expect_emit()
            .with(eq(TabEvent::TabPress {
                target: "galery-1".to_string(),
            }))
            .times(1)
            .returning(|_| EmitOutcome::default());
        navigator
            .expect_navigate()
            .with(eq(NavigateRequest::merge("GALERY")))
            .times(1)
            .return_const(());

        assert_eq!(view.press(&state(0), 1, &mut navigator), PressOutcome::Navigated);
    }

    #[test]
    fn test_press_focused_does_not_navigate() {
        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        let mut navigator = MockNavigator::new();
        navigator
            .expect_emit()
            .times(1)
            .returning(|_| EmitOutcome::default());
        navigator.expect_navigate().never();

        assert_eq!(view.press(&state(0), 0, &mut navigator), PressOutcome::AlreadyFocused);
    }

    #[test]
    fn test_prevented_press_does_not_navigate() {
        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        let mut navigator = MockNavigator::new();
        navigator.expect_emit().times(1).returning(|_| EmitOutcome {
            default_prevented: true,
        });
        navigator.expect_navigate().never();

        assert_eq!(view.press(&state(0), 1, &mut navigator), PressOutcome::Prevented);
    }

    #[test]
    fn test_press_out_of_range_is_ignored() {
        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        let mut navigator = MockNavigator::new();
        navigator.expect_emit().never();
        navigator.expect_navigate().never();

        assert_eq!(view.press(&state(0), 4, &mut navigator), PressOutcome::Ignored);
    }

    #[test]
    fn test_long_press_emits_only() {
        let view = TabBarView::new(WindowDimensions::new(400.0, 800.0), TabBarConfig::new());
        let mut navigator = MockNavigator::new();
        navigator
            .expect_emit()
            .with(eq(TabEvent::TabLongPress {
                target: "home-1".to_string(),
            }))
            .times(1)
            .returning(|_| EmitOutcome::default());
        navigator.expect_navigate().never();

        view.long_press(&state(1), 0, &mut navigator);
    }
}
