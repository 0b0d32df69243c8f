//! Platform identification
//!
//! Only two decisions in the shell depend on the platform: how much of the
//! bottom safe-area inset is absorbed by the home indicator, and whether the
//! compact landscape tab bar is available.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portion of the bottom inset absorbed by the iOS home indicator
pub const IOS_HOME_INDICATOR_INSET: f32 = 4.0;

/// Errors raised while reading platform facts
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform identifier is not one we know about
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
}

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PlatformOs {
    /// Apple iOS / iPadOS
    #[default]
    Ios,
    /// Android
    Android,
    /// Browser
    Web,
    /// Windows
    Windows,
    /// macOS
    Macos,
    /// Linux
    Linux,
}

impl PlatformOs {
    /// Identifier as reported by the runtime
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformOs::Ios => "ios",
            PlatformOs::Android => "android",
            PlatformOs::Web => "web",
            PlatformOs::Windows => "windows",
            PlatformOs::Macos => "macos",
            PlatformOs::Linux => "linux",
        }
    }
}

impl fmt::Display for PlatformOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformOs {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(PlatformOs::Ios),
            "android" => Ok(PlatformOs::Android),
            "web" => Ok(PlatformOs::Web),
            "windows" => Ok(PlatformOs::Windows),
            "macos" => Ok(PlatformOs::Macos),
            "linux" => Ok(PlatformOs::Linux),
            other => Err(PlatformError::UnknownPlatform(other.to_string())),
        }
    }
}

impl TryFrom<String> for PlatformOs {
    type Error = PlatformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Platform identifier plus device class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    /// Operating system family
    pub os: PlatformOs,
    /// Whether the device is a tablet (iPad)
    #[serde(default)]
    pub is_pad: bool,
}

impl PlatformInfo {
    /// Create platform info for a phone-class device
    pub fn new(os: PlatformOs) -> Self {
        Self { os, is_pad: false }
    }

    /// iOS phone
    pub fn ios_phone() -> Self {
        Self::new(PlatformOs::Ios)
    }

    /// iOS tablet
    pub fn ios_pad() -> Self {
        Self {
            os: PlatformOs::Ios,
            is_pad: true,
        }
    }

    /// Android device
    pub fn android() -> Self {
        Self::new(PlatformOs::Android)
    }

    /// Check if running on iOS
    pub fn is_ios(&self) -> bool {
        self.os == PlatformOs::Ios
    }

    /// Bottom inset swallowed by the home indicator (zero off iOS)
    pub fn home_indicator_inset(&self) -> f32 {
        if self.is_ios() {
            IOS_HOME_INDICATOR_INSET
        } else {
            0.0
        }
    }

    /// Whether the compact landscape tab bar convention applies
    pub fn has_compact_landscape(&self) -> bool {
        self.is_ios() && !self.is_pad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_indicator_inset() {
        assert_eq!(PlatformInfo::ios_phone().home_indicator_inset(), 4.0);
        assert_eq!(PlatformInfo::ios_pad().home_indicator_inset(), 4.0);
        assert_eq!(PlatformInfo::android().home_indicator_inset(), 0.0);
        assert_eq!(
            PlatformInfo::new(PlatformOs::Web).home_indicator_inset(),
            0.0
        );
    }

    #[test]
    fn test_compact_landscape_only_on_ios_phone() {
        assert!(PlatformInfo::ios_phone().has_compact_landscape());
        assert!(!PlatformInfo::ios_pad().has_compact_landscape());
        assert!(!PlatformInfo::android().has_compact_landscape());
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("ios".parse::<PlatformOs>(), Ok(PlatformOs::Ios));
        assert_eq!(" Android ".parse::<PlatformOs>(), Ok(PlatformOs::Android));
        assert_eq!(
            "symbian".parse::<PlatformOs>(),
            Err(PlatformError::UnknownPlatform("symbian".to_string()))
        );
    }

    #[test]
    fn test_platform_info_deserialize() {
        let info: PlatformInfo = serde_json::from_str(r#"{"os":"ios","isPad":true}"#).unwrap();
        assert_eq!(info, PlatformInfo::ios_pad());

        let info: PlatformInfo = serde_json::from_str(r#"{"os":"android"}"#).unwrap();
        assert!(!info.is_pad);
    }

    #[test]
    fn test_platform_deserialize_matches_from_str() {
        let os: PlatformOs = serde_json::from_str(r#""iOS""#).unwrap();
        assert_eq!(os, PlatformOs::Ios);

        let err = serde_json::from_str::<PlatformOs>(r#""symbian""#).unwrap_err();
        assert!(err.to_string().contains("Unknown platform: symbian"));

        // Serialization keeps the lowercase identifier
        assert_eq!(serde_json::to_string(&PlatformOs::Macos).unwrap(), r#""macos""#);
    }
}
