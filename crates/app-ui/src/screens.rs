//! Application screens
//!
//! Both screens scroll under a floating tab bar, so each reserves bottom
//! padding equal to the last height the bar reported.

use crate::tokens::{blur, colors, spacing, BlurType};
use app_platform::{PlatformInfo, WindowDimensions};
use serde::{Deserialize, Serialize};

/// Route name of the home screen
pub const HOME: &str = "HOME";
/// Route name of the gallery screen
pub const GALERY: &str = "GALERY";

/// Number of tiles in the gallery
pub const GALERY_TILE_COUNT: usize = 40;
/// Height of a gallery tile
pub const GALERY_TILE_HEIGHT: f32 = 120.0;

/// Scroll container settings shared by the screens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollContent {
    /// Bottom padding reserved for the tab bar
    pub padding_bottom: f32,
    /// Whether the vertical indicator is shown
    pub shows_vertical_indicator: bool,
}

impl ScrollContent {
    fn under_tab_bar(tab_bar_height: f32) -> Self {
        Self {
            padding_bottom: tab_bar_height,
            shows_vertical_indicator: false,
        }
    }
}

/// A titled block of text on the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Body text
    pub description: String,
    /// Top margin
    pub margin_top: f32,
    /// Horizontal padding
    pub padding_x: f32,
}

impl Section {
    /// Create a section
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            margin_top: spacing::SECTION_MARGIN_TOP,
            padding_x: spacing::SECTION_PADDING_X,
        }
    }
}

/// Rendered home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    /// Scroll container
    pub scroll: ScrollContent,
    /// Background color
    pub background: String,
    /// Blur over the header
    pub header_blur: BlurType,
    /// Header blur amount
    pub header_blur_amount: f32,
    /// Content sections
    pub sections: Vec<Section>,
}

/// Home screen
#[derive(Debug, Clone, PartialEq)]
pub struct HomeScreen {
    sections: Vec<Section>,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self {
            sections: vec![
                Section::new(
                    "Step One",
                    "Edit the shell configuration to change this screen and then come back to see your edits.",
                ),
                Section::new("See Your Changes", "Reload the app to pick up your changes."),
                Section::new("Debug", "Set RUST_LOG=debug to follow layout decisions."),
                Section::new("Learn More", "Read the docs to discover what to do next."),
            ],
        }
    }
}

impl HomeScreen {
    /// Create the home screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Render with the given tab bar height
    pub fn render(&self, tab_bar_height: f32, platform: &PlatformInfo) -> HomeView {
        HomeView {
            scroll: ScrollContent::under_tab_bar(tab_bar_height),
            background: colors::BACKGROUND.to_string(),
            header_blur: BlurType::for_platform(platform),
            header_blur_amount: blur::HOME_HEADER,
            sections: self.sections.clone(),
        }
    }
}

/// One gallery tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Tile index
    pub id: usize,
    /// Tile height
    pub height: f32,
    /// Vertical margin
    pub margin_y: f32,
    /// Caption
    pub caption: String,
}

/// Rendered gallery screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaleryView {
    /// Scroll container
    pub scroll: ScrollContent,
    /// Size of the background image (the window)
    pub background_size: WindowDimensions,
    /// Tiles in order
    pub tiles: Vec<Tile>,
}

impl GaleryView {
    /// Total scrollable height including the tab bar padding
    pub fn content_height(&self) -> f32 {
        self.tiles
            .iter()
            .map(|t| t.height + 2.0 * t.margin_y)
            .sum::<f32>()
            + self.scroll.padding_bottom
    }
}

/// Gallery screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GaleryScreen;

impl GaleryScreen {
    /// Create the gallery screen
    pub fn new() -> Self {
        Self
    }

    /// Render with the given tab bar height
    pub fn render(&self, tab_bar_height: f32, window: WindowDimensions) -> GaleryView {
        GaleryView {
            scroll: ScrollContent::under_tab_bar(tab_bar_height),
            background_size: window,
            tiles: (0..GALERY_TILE_COUNT)
                .map(|id| Tile {
                    id,
                    height: GALERY_TILE_HEIGHT,
                    margin_y: spacing::TILE_MARGIN_Y,
                    caption: "components".to_string(),
                })
                .collect(),
        }
    }
}

/// Any rendered screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum ScreenView {
    /// Home screen
    Home(HomeView),
    /// Gallery screen
    Galery(GaleryView),
    /// A route with no screen registered
    Empty {
        /// Route name
        name: String,
    },
}

impl ScreenView {
    /// Bottom padding reserved for the tab bar
    pub fn padding_bottom(&self) -> f32 {
        match self {
            ScreenView::Home(view) => view.scroll.padding_bottom,
            ScreenView::Galery(view) => view.scroll.padding_bottom,
            ScreenView::Empty { .. } => 0.0,
        }
    }
}

/// Render the screen registered under a route name
pub fn render_screen(
    name: &str,
    tab_bar_height: f32,
    platform: &PlatformInfo,
    window: WindowDimensions,
) -> ScreenView {
    match name {
        HOME => ScreenView::Home(HomeScreen::new().render(tab_bar_height, platform)),
        GALERY => ScreenView::Galery(GaleryScreen::new().render(tab_bar_height, window)),
        other => ScreenView::Empty {
            name: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_reserves_tab_bar_height() {
        let view = HomeScreen::new().render(71.0, &PlatformInfo::ios_phone());
        assert_eq!(view.scroll.padding_bottom, 71.0);
        assert!(!view.scroll.shows_vertical_indicator);
        assert_eq!(view.sections.len(), 4);
        assert_eq!(view.sections[0].margin_top, 32.0);
        assert_eq!(view.header_blur, BlurType::UltraThinMaterialLight);
    }

    #[test]
    fn test_galery_tiles() {
        let window = WindowDimensions::new(400.0, 800.0);
        let view = GaleryScreen::new().render(48.0, window);
        assert_eq!(view.tiles.len(), 40);
        assert_eq!(view.background_size, window);
        assert_eq!(view.content_height(), 40.0 * 140.0 + 48.0);
    }

    #[test]
    fn test_render_screen_by_name() {
        let platform = PlatformInfo::android();
        let window = WindowDimensions::new(400.0, 800.0);

        assert!(matches!(
            render_screen(HOME, 55.0, &platform, window),
            ScreenView::Home(_)
        ));
        assert_eq!(render_screen(GALERY, 55.0, &platform, window).padding_bottom(), 55.0);
        assert_eq!(
            render_screen("SETTINGS", 55.0, &platform, window),
            ScreenView::Empty {
                name: "SETTINGS".to_string()
            }
        );
    }
}
