//! Platform facts for the tab shell
//!
//! This crate describes the device the shell runs on: which platform family
//! it belongs to, the current window size and the safe-area insets. The
//! hosting runtime owns these values; everything downstream only reads them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod metrics;
pub mod platform;

pub use metrics::{DeviceFacts, EdgeInsets, WindowDimensions};
pub use platform::{PlatformError, PlatformInfo, PlatformOs};
