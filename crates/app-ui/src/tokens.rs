//! Design tokens for the tab shell
//!
//! This module provides the fixed numbers the shell is drawn with: tab-bar
//! policy constants, breakpoints, colors, spacing and blur settings.

use app_platform::PlatformInfo;
use serde::{Deserialize, Serialize};

// =============================================================================
// Tab Bar Tokens
// =============================================================================

/// Tab bar dimensions
pub mod tab_bar {
    /// Default tab bar height before safe-area padding (55pt)
    pub const DEFAULT_HEIGHT: f32 = 55.0;
    /// Compact landscape tab bar height before safe-area padding (32pt)
    pub const COMPACT_HEIGHT: f32 = 32.0;
    /// Assumed width of a tab item with no width override (125pt)
    pub const DEFAULT_MAX_ITEM_WIDTH: f32 = 125.0;
    /// Top padding inside the bar (6pt)
    pub const PADDING_TOP: f32 = 6.0;
    /// Android elevation of the bar
    pub const ELEVATION: f32 = 8.0;
    /// Tab icon size (25pt)
    pub const ICON_SIZE: f32 = 25.0;
    /// Flex share of each tab item
    pub const ITEM_FLEX: f32 = 1.0;
}

/// Tab icon names
pub mod icons {
    /// Icon for the home tab
    pub const HOME: &str = "home";
    /// Icon for every other tab
    pub const DEFAULT: &str = "laptop";
}

// =============================================================================
// Color Tokens
// =============================================================================

/// Tab colors
pub mod colors {
    /// Focused tab tint
    pub const TAB_ACTIVE: &str = "#1201f5";
    /// Unfocused tab tint
    pub const TAB_INACTIVE: &str = "#222";
    /// Screen background
    pub const BACKGROUND: &str = "#FFFFFF";
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing used by the screens
pub mod spacing {
    /// Section top margin (32pt)
    pub const SECTION_MARGIN_TOP: f32 = 32.0;
    /// Section horizontal padding (24pt)
    pub const SECTION_PADDING_X: f32 = 24.0;
    /// Gap between a section title and its description (8pt)
    pub const SECTION_DESCRIPTION_MARGIN_TOP: f32 = 8.0;
    /// Vertical margin around gallery tiles (10pt)
    pub const TILE_MARGIN_Y: f32 = 10.0;
}

/// Border radius tokens
pub mod radius {
    /// Top corners of the tab bar (10pt)
    pub const TAB_BAR_TOP: f32 = 10.0;
}

// =============================================================================
// Blur Tokens
// =============================================================================

/// Native blur material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlurType {
    /// iOS ultra thin light material
    UltraThinMaterialLight,
    /// Generic light blur
    Light,
}

impl BlurType {
    /// Material used on the given platform
    pub fn for_platform(platform: &PlatformInfo) -> Self {
        if platform.is_ios() {
            BlurType::UltraThinMaterialLight
        } else {
            BlurType::Light
        }
    }
}

/// Blur amounts
pub mod blur {
    /// Blur behind the tab bar
    pub const TAB_BAR: f32 = 10.0;
    /// Blur over the home header badge
    pub const HOME_HEADER: f32 = 7.0;
}

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Device width class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    /// Phone (< 768pt)
    Phone,
    /// Tablet (>= 768pt)
    Tablet,
}

/// Breakpoint widths
pub mod breakpoints {
    /// Tablet breakpoint (768pt)
    pub const TABLET: f32 = 768.0;

    /// Check if width is tablet-class
    pub fn is_tablet(width: f32) -> bool {
        width >= TABLET
    }

    /// Get current breakpoint
    pub fn current(width: f32) -> super::Breakpoint {
        if is_tablet(width) {
            super::Breakpoint::Tablet
        } else {
            super::Breakpoint::Phone
        }
    }
}
