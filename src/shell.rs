//! Application shell
//!
//! [`AppShell`] wires the navigator, the tab bar and the screens together.
//! Every runtime event goes through [`AppShell::handle`], which applies the
//! update and then renders, so a new measurement is always visible to the
//! next layout computation.

use crate::config::ShellConfig;
use crate::error::Result;
use app_platform::{DeviceFacts, EdgeInsets, WindowDimensions};
use app_ui::screens::{render_screen, ScreenView};
use app_ui::{
    Descriptors, EventListener, PressOutcome, RenderedTabBar, Route, TabBarConfig, TabBarView,
    TabNavigationState, TabNavigator,
};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Events delivered by the hosting runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellEvent {
    /// The tab bar finished a layout pass
    Layout {
        /// Measured height
        height: f32,
        /// Measured width
        width: f32,
    },
    /// The window was rotated or resized
    WindowChanged(WindowDimensions),
    /// The safe-area insets changed
    InsetsChanged(EdgeInsets),
    /// A tab was pressed
    Press(usize),
    /// A tab was long-pressed
    LongPress(usize),
}

/// One rendered frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// The tab bar
    pub tab_bar: RenderedTabBar,
    /// The focused screen
    pub screen: ScreenView,
}

/// The two-screen tab shell
pub struct AppShell {
    /// Current device facts
    device: DeviceFacts,
    /// Navigation collaborator
    navigator: TabNavigator,
    /// Route options by key
    descriptors: Descriptors,
    /// The tab bar
    tab_bar: TabBarView,
    /// Last height reported by the tab bar
    tab_bar_height: Rc<Cell<f32>>,
    /// Outcome of the last primary press
    last_press: Option<PressOutcome>,
}

impl AppShell {
    /// Build the shell from a configuration
    pub fn new(config: ShellConfig) -> Result<Self> {
        config.validate()?;

        let routes: Vec<Route> = config
            .screens
            .iter()
            .map(|screen| Route::new(screen.name.clone()))
            .collect();
        let descriptors: Descriptors = routes
            .iter()
            .zip(&config.screens)
            .map(|(route, screen)| (route.key.clone(), config.resolved_options(screen)))
            .collect();

        let navigator = TabNavigator::new(routes, config.initial_index());

        let tab_bar_height = Rc::new(Cell::new(0.0));
        let sink = Rc::clone(&tab_bar_height);
        let mut tab_bar_config = TabBarConfig::new().on_height_change(move |h| sink.set(h));
        tab_bar_config.style = config.tab_bar_style.clone();

        let tab_bar = TabBarView::new(config.device.window, tab_bar_config);

        // Screens read the computed height until the bar reports a measurement
        let initial = tab_bar.render(navigator.state(), &descriptors, &config.device);
        tab_bar_height.set(initial.metrics.height);

        tracing::info!(
            screens = descriptors.len(),
            platform = %config.device.platform.os,
            "Shell started"
        );

        Ok(Self {
            device: config.device,
            navigator,
            descriptors,
            tab_bar,
            tab_bar_height,
            last_press: None,
        })
    }

    /// Apply an event, then render
    pub fn handle(&mut self, event: ShellEvent) -> Frame {
        tracing::trace!(?event, "Shell event");
        match event {
            ShellEvent::Layout { height, width } => {
                self.tab_bar.handle_layout(height, width);
            }
            ShellEvent::WindowChanged(window) => {
                self.device.set_window(window);
            }
            ShellEvent::InsetsChanged(insets) => {
                self.device.set_insets(insets);
            }
            ShellEvent::Press(index) => {
                let state = self.navigator.state().clone();
                let outcome = self.tab_bar.press(&state, index, &mut self.navigator);
                tracing::debug!(index, ?outcome, "Tab pressed");
                self.last_press = Some(outcome);
            }
            ShellEvent::LongPress(index) => {
                let state = self.navigator.state().clone();
                self.tab_bar.long_press(&state, index, &mut self.navigator);
            }
        }
        self.render()
    }

    /// Render the current frame
    pub fn render(&self) -> Frame {
        let state = self.navigator.state();
        let tab_bar = self.tab_bar.render(state, &self.descriptors, &self.device);
        let screen = match state.focused_route() {
            Some(route) => render_screen(
                &route.name,
                self.tab_bar_height.get(),
                &self.device.platform,
                self.device.window,
            ),
            None => ScreenView::Empty {
                name: String::new(),
            },
        };
        Frame { tab_bar, screen }
    }

    /// Register a navigation listener; returning true prevents tab presses
    pub fn add_listener(&mut self, listener: EventListener) {
        self.navigator.add_listener(listener);
    }

    /// Current navigation state
    pub fn state(&self) -> &TabNavigationState {
        self.navigator.state()
    }

    /// Route options by key
    pub fn descriptors(&self) -> &Descriptors {
        &self.descriptors
    }

    /// Current device facts
    pub fn device(&self) -> &DeviceFacts {
        &self.device
    }

    /// The tab bar view
    pub fn tab_bar(&self) -> &TabBarView {
        &self.tab_bar
    }

    /// Height screens currently reserve for the tab bar
    pub fn tab_bar_height(&self) -> f32 {
        self.tab_bar_height.get()
    }

    /// Outcome of the last primary press
    pub fn last_press(&self) -> Option<PressOutcome> {
        self.last_press
    }
}

impl std::fmt::Debug for AppShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppShell")
            .field("device", &self.device)
            .field("navigator", &self.navigator)
            .field("tab_bar", &self.tab_bar)
            .field("tab_bar_height", &self.tab_bar_height.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_height_seeds_screens() {
        let shell = AppShell::new(ShellConfig::default()).unwrap();
        // iOS phone portrait, bottom inset 34 -> 55 + 30
        assert_eq!(shell.tab_bar_height(), 85.0);
        assert_eq!(shell.descriptors().len(), 2);
        assert!(!shell.descriptors().is_empty());

        let frame = shell.render();
        assert_eq!(frame.tab_bar.metrics.height, 85.0);
        assert_eq!(frame.screen.padding_bottom(), 85.0);
        assert!(matches!(frame.screen, ScreenView::Home(_)));
    }

    #[test]
    fn test_press_switches_screen() {
        let mut shell = AppShell::new(ShellConfig::default()).unwrap();
        let frame = shell.handle(ShellEvent::Press(1));

        assert_eq!(shell.last_press(), Some(PressOutcome::Navigated));
        assert_eq!(shell.state().index, 1);
        assert!(matches!(frame.screen, ScreenView::Galery(_)));
        assert!(frame.tab_bar.items[1].selected);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ShellConfig {
            screens: Vec::new(),
            ..Default::default()
        };
        assert!(AppShell::new(config).is_err());
    }
}
