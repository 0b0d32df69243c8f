//! Two-screen mobile shell with an adaptive bottom tab bar
//!
//! The shell hosts a Home and a Galery screen behind a tab bar whose height
//! and label placement adapt to the device, its orientation and per-screen
//! style overrides. The layout decisions live in [`app_ui::layout`]; this
//! crate loads the configuration and funnels runtime events through
//! [`AppShell`].
//!
//! # Example
//!
//! ```rust
//! use app_platform::WindowDimensions;
//! use tab_shell::{AppShell, ShellConfig, ShellEvent};
//!
//! let mut shell = AppShell::new(ShellConfig::default()).unwrap();
//! let frame = shell.handle(ShellEvent::WindowChanged(WindowDimensions::new(844.0, 390.0)));
//! assert!(frame.tab_bar.metrics.horizontal_labels);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod shell;

pub use config::{ScreenConfig, ShellConfig};
pub use error::{ConfigError, Result};
pub use shell::{AppShell, Frame, ShellEvent};
