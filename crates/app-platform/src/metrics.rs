//! Window dimensions and safe-area insets

use crate::platform::PlatformInfo;
use serde::{Deserialize, Serialize};

/// Size of the full device window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WindowDimensions {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

impl WindowDimensions {
    /// Create window dimensions
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Wider than tall
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Same window after a rotation
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Device-reserved edge margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EdgeInsets {
    /// Top inset (status bar, notch)
    #[serde(default)]
    pub top: f32,
    /// Bottom inset (home indicator)
    #[serde(default)]
    pub bottom: f32,
    /// Left inset
    #[serde(default)]
    pub left: f32,
    /// Right inset
    #[serde(default)]
    pub right: f32,
}

impl EdgeInsets {
    /// Create insets
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Insets with only a bottom margin
    pub fn bottom(bottom: f32) -> Self {
        Self {
            bottom,
            ..Default::default()
        }
    }

    /// Larger of the two horizontal insets
    pub fn horizontal_max(&self) -> f32 {
        self.left.max(self.right)
    }
}

/// Everything the runtime tells us about the device at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceFacts {
    /// Platform identifier
    #[serde(flatten)]
    pub platform: PlatformInfo,
    /// Current window size
    #[serde(default)]
    pub window: WindowDimensions,
    /// Current safe-area insets
    #[serde(default)]
    pub insets: EdgeInsets,
}

impl DeviceFacts {
    /// Create device facts
    pub fn new(platform: PlatformInfo, window: WindowDimensions, insets: EdgeInsets) -> Self {
        Self {
            platform,
            window,
            insets,
        }
    }

    /// Replace the window size (rotation/resize). Returns true on change.
    pub fn set_window(&mut self, window: WindowDimensions) -> bool {
        if self.window == window {
            return false;
        }
        tracing::debug!(
            width = window.width,
            height = window.height,
            "Window dimensions changed"
        );
        self.window = window;
        true
    }

    /// Replace the safe-area insets. Returns true on change.
    pub fn set_insets(&mut self, insets: EdgeInsets) -> bool {
        if self.insets == insets {
            return false;
        }
        tracing::debug!(bottom = insets.bottom, "Safe-area insets changed");
        self.insets = insets;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformOs;

    #[test]
    fn test_landscape() {
        assert!(WindowDimensions::new(800.0, 400.0).is_landscape());
        assert!(!WindowDimensions::new(400.0, 800.0).is_landscape());
        // Square is not landscape
        assert!(!WindowDimensions::new(500.0, 500.0).is_landscape());
    }

    #[test]
    fn test_rotated() {
        let window = WindowDimensions::new(390.0, 844.0);
        assert_eq!(window.rotated(), WindowDimensions::new(844.0, 390.0));
    }

    #[test]
    fn test_horizontal_max() {
        assert_eq!(EdgeInsets::new(0.0, 21.0, 44.0, 47.0).horizontal_max(), 47.0);
        assert_eq!(EdgeInsets::default().horizontal_max(), 0.0);
    }

    #[test]
    fn test_set_window_reports_change() {
        let mut facts = DeviceFacts::new(
            PlatformInfo::ios_phone(),
            WindowDimensions::new(390.0, 844.0),
            EdgeInsets::bottom(34.0),
        );
        assert!(!facts.set_window(WindowDimensions::new(390.0, 844.0)));
        assert!(facts.set_window(WindowDimensions::new(844.0, 390.0)));
        assert!(facts.window.is_landscape());
    }

    #[test]
    fn test_set_insets_reports_change() {
        let mut facts = DeviceFacts::default();
        assert!(!facts.set_insets(EdgeInsets::default()));
        assert!(facts.set_insets(EdgeInsets::bottom(20.0)));
        assert_eq!(facts.insets.bottom, 20.0);
    }

    #[test]
    fn test_device_facts_deserialize() {
        let json = r#"{
            "os": "android",
            "window": {"width": 412.0, "height": 915.0},
            "insets": {"bottom": 24.0}
        }"#;
        let facts: DeviceFacts = serde_json::from_str(json).unwrap();
        assert_eq!(facts.platform.os, PlatformOs::Android);
        assert_eq!(facts.window.width, 412.0);
        assert_eq!(facts.insets.bottom, 24.0);
        assert_eq!(facts.insets.top, 0.0);
    }
}
