//! Shell configuration
//!
//! The shell is described by a JSON document: default options applied to
//! every screen, the ordered screen list, the initial route and the device
//! the shell starts on. [`ShellConfig::default`] is the two-screen app.

use crate::error::{ConfigError, Result};
use app_platform::{DeviceFacts, EdgeInsets, PlatformInfo, WindowDimensions};
use app_ui::screens::{GALERY, HOME};
use app_ui::style::{Overflow, Position, StyleFragment};
use app_ui::tokens::radius;
use app_ui::RouteOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One screen in the tab navigator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenConfig {
    /// Route name
    pub name: String,
    /// Screen options, layered over the shared screen options
    #[serde(default)]
    pub options: RouteOptions,
}

impl ScreenConfig {
    /// Create a screen entry
    pub fn new(name: impl Into<String>, options: RouteOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// Complete shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// Options shared by every screen
    #[serde(default)]
    pub screen_options: RouteOptions,
    /// Screens in tab order
    pub screens: Vec<ScreenConfig>,
    /// Name of the initially focused screen (defaults to the first)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_route_name: Option<String>,
    /// Caller style passed to the tab bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar_style: Option<StyleFragment>,
    /// Device the shell starts on
    #[serde(default)]
    pub device: DeviceFacts,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            screen_options: RouteOptions {
                tab_bar_style: Some(
                    StyleFragment::new()
                        .with_position(Position::Absolute)
                        .with_top_radius(radius::TAB_BAR_TOP)
                        .with_overflow(Overflow::Hidden),
                ),
                header_shown: Some(false),
                ..Default::default()
            },
            screens: vec![
                ScreenConfig::new(HOME, RouteOptions::new().with_title("Home")),
                ScreenConfig::new(GALERY, RouteOptions::new().with_title("Galery")),
            ],
            initial_route_name: None,
            tab_bar_style: None,
            device: DeviceFacts::new(
                PlatformInfo::ios_phone(),
                WindowDimensions::new(390.0, 844.0),
                EdgeInsets::new(47.0, 34.0, 0.0, 0.0),
            ),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded shell config");
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check screen names and the initial route
    pub fn validate(&self) -> Result<()> {
        if self.screens.is_empty() {
            return Err(ConfigError::NoScreens);
        }

        let mut seen = HashSet::new();
        for screen in &self.screens {
            if !seen.insert(screen.name.as_str()) {
                return Err(ConfigError::DuplicateScreen(screen.name.clone()));
            }
        }

        if let Some(initial) = &self.initial_route_name {
            if !seen.contains(initial.as_str()) {
                return Err(ConfigError::UnknownInitialRoute(initial.clone()));
            }
        }

        Ok(())
    }

    /// Index of the initially focused screen
    pub fn initial_index(&self) -> usize {
        self.initial_route_name
            .as_ref()
            .and_then(|name| self.screens.iter().position(|s| &s.name == name))
            .unwrap_or(0)
    }

    /// Options of a screen layered over the shared options
    pub fn resolved_options(&self, screen: &ScreenConfig) -> RouteOptions {
        self.screen_options.merged_with(&screen.options)
    }
}
