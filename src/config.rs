//! Page configuration: selectors, class names, delays and image presets.
//!
//! Defaults match the portfolio markup. A page may override any subset by
//! embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "navbar": { "threshold_px": 60 }, "typewriter": { "enabled": true } }
//! </script>
//! ```
//!
//! Missing sections and fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::image_cycler::{StylePreset, default_presets};
use crate::surface::Surface;

/// Selector of the embedded JSON configuration block.
pub const CONFIG_SELECTOR: &str = "#folio-config";

pub const DEFAULT_NAVBAR_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEFAULT_IMAGE_ADVANCE_DELAY_MS: u32 = 150;
pub const DEFAULT_IMAGE_RELEASE_DELAY_MS: u32 = 300;
pub const DEFAULT_TYPEWRITER_SPEED_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Root container receiving the theme and `loaded` classes.
    pub root_selector: String,
    pub navbar: NavbarConfig,
    pub anchors: AnchorConfig,
    pub reveal: RevealConfig,
    pub cards: CardConfig,
    pub theme: ThemeConfig,
    pub image: ImageConfig,
    pub dropdown: DropdownConfig,
    pub mobile_menu: MobileMenuConfig,
    pub typewriter: TypewriterConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            root_selector: "body".into(),
            navbar: NavbarConfig::default(),
            anchors: AnchorConfig::default(),
            reveal: RevealConfig::default(),
            cards: CardConfig::default(),
            theme: ThemeConfig::default(),
            image: ImageConfig::default(),
            dropdown: DropdownConfig::default(),
            mobile_menu: MobileMenuConfig::default(),
            typewriter: TypewriterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub selector: String,
    pub scrolled_class: String,
    /// Vertical scroll offset (CSS px) above which the navbar is "scrolled".
    pub threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self { selector: "#navbar".into(), scrolled_class: "scrolled".into(), threshold_px: DEFAULT_NAVBAR_THRESHOLD_PX }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub selector: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { selector: r##"a[href^="#"]"##.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    /// Class added to the root once the window `load` event fires.
    pub loaded_class: String,
    /// Intersection ratio at which an element counts as visible.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".fade-in".into(),
            visible_class: "visible".into(),
            loaded_class: "loaded".into(),
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_REVEAL_ROOT_MARGIN.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub selector: String,
    pub hover_transform: String,
    pub rest_transform: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            selector: ".project-card".into(),
            hover_transform: "translateY(-10px) scale(1.02)".into(),
            rest_transform: "translateY(-10px) scale(1)".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_selector: String,
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { toggle_selector: "#theme-toggle".into(), dark_class: "dark-mode".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub selector: String,
    /// Transient class held while the swap animation plays.
    pub active_class: String,
    pub advance_delay_ms: u32,
    pub release_delay_ms: u32,
    pub presets: Vec<StylePreset>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            selector: "#profile-image".into(),
            active_class: "clicked".into(),
            advance_delay_ms: DEFAULT_IMAGE_ADVANCE_DELAY_MS,
            release_delay_ms: DEFAULT_IMAGE_RELEASE_DELAY_MS,
            presets: default_presets(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    pub panel_selector: String,
    pub button_selector: String,
    /// Attribute on a toggle button naming the id of the panel it controls.
    pub target_attribute: String,
    pub open_class: String,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            panel_selector: ".project-details".into(),
            button_selector: ".dropdown-toggle".into(),
            target_attribute: "data-target".into(),
            open_class: "active".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MobileMenuConfig {
    pub toggle_selector: String,
    pub links_selector: String,
    pub active_class: String,
}

impl Default for MobileMenuConfig {
    fn default() -> Self {
        Self { toggle_selector: ".mobile-menu".into(), links_selector: ".nav-links".into(), active_class: "active".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub enabled: bool,
    pub selector: String,
    pub speed_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self { enabled: false, selector: ".hero h1".into(), speed_ms: DEFAULT_TYPEWRITER_SPEED_MS }
    }
}

impl PageConfig {
    /// Parse a JSON override document and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the embedded configuration block, if the page has one.
    ///
    /// A page without the block gets the defaults.
    pub fn load<S: Surface>(surface: &S) -> Result<Self, ConfigError> {
        match surface.find(CONFIG_SELECTOR) {
            Some(block) => Self::from_json(&surface.text(&block)),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.image.presets.is_empty() {
            return Err(ConfigError::EmptyPresets);
        }
        if self.typewriter.speed_ms == 0 {
            return Err(ConfigError::ZeroTypewriterSpeed);
        }
        Ok(())
    }
}
