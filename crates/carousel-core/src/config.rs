use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Where the first page rests inside the slider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstItemAlignment {
    Start,
    #[default]
    Center,
}

/// Extra per-page animation on top of scale/opacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageAnimation {
    Parallax,
}

/// Widget configuration surface: paging, looping, autoplay and geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Wrap around past the last page
    #[serde(rename = "loop", default)]
    pub loop_enabled: bool,
    /// Clone pages rendered on each side when looping (>= 1)
    #[serde(default = "default_pages_per_side")]
    pub additional_pages_per_side: usize,
    /// Advance automatically (requires loop)
    #[serde(default)]
    pub auto_play: bool,
    /// Autoplay interval in milliseconds
    #[serde(default = "default_duration")]
    pub duration_ms: u64,
    /// Visible width of the scroll container
    #[serde(default = "default_width")]
    pub slider_width: f32,
    /// Width of a single page
    #[serde(default = "default_width")]
    pub item_width: f32,
    #[serde(default)]
    pub first_item_alignment: FirstItemAlignment,
    /// Initial actual page index
    #[serde(default)]
    pub initial_page: usize,
    /// Opacity of a page one full item width away from rest
    #[serde(default = "default_one")]
    pub inactive_opacity: f32,
    /// Scale of a page one full item width away from rest
    #[serde(default = "default_one")]
    pub inactive_scale: f32,
    /// Gap between adjacent pages
    #[serde(default)]
    pub space_between: f32,
    /// Leading/trailing inset for start-aligned, non-looping carousels
    #[serde(default)]
    pub space_head_tail: f32,
    #[serde(default)]
    pub animation: Option<PageAnimation>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            loop_enabled: false,
            additional_pages_per_side: default_pages_per_side(),
            auto_play: false,
            duration_ms: default_duration(),
            slider_width: default_width(),
            item_width: default_width(),
            first_item_alignment: FirstItemAlignment::default(),
            initial_page: 0,
            inactive_opacity: default_one(),
            inactive_scale: default_one(),
            space_between: 0.0,
            space_head_tail: 0.0,
            animation: None,
        }
    }
}

impl CarouselConfig {
    /// Autoplay interval as Duration
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Autoplay only runs when looping; past the last page there is no target
    pub fn autoplay_enabled(&self) -> bool {
        self.auto_play && self.loop_enabled && self.duration_ms > 0
    }

    /// Content inset applied on both ends of the scroll container
    pub fn horizontal_padding(&self) -> f32 {
        let centered = (self.slider_width - self.item_width) / 2.0;
        if self.first_item_alignment == FirstItemAlignment::Center || self.loop_enabled {
            centered
        } else {
            self.space_head_tail
        }
    }

    /// Reject geometry that cannot produce an offset table
    pub fn validate_geometry(&self) -> crate::Result<()> {
        if !(self.item_width.is_finite() && self.item_width > 0.0) {
            return Err(crate::Error::Config(format!(
                "item_width must be positive, got {}",
                self.item_width
            )));
        }
        if !(self.slider_width.is_finite() && self.slider_width > 0.0) {
            return Err(crate::Error::Config(format!(
                "slider_width must be positive, got {}",
                self.slider_width
            )));
        }
        Ok(())
    }
}

/// Platform-driven constants of the page controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay before a silent loop jump is applied (0 = immediate)
    #[serde(default = "default_jump_delay")]
    pub jump_delay_ms: u64,
    /// Grace period after drag end before autoplay resumes
    #[serde(default = "default_drag_grace")]
    pub drag_grace_ms: u64,
    /// Max distance from a page offset for the position to count as that page
    #[serde(default = "default_snap_tolerance")]
    pub snap_tolerance_px: f32,
    /// Freeze animations and user scrolling while a jump is in flight
    #[serde(default = "default_true")]
    pub freeze_during_jump: bool,
    /// Wait for a scroll sample at the jump target before unfreezing
    #[serde(default = "default_true")]
    pub confirm_jumps: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            jump_delay_ms: default_jump_delay(),
            drag_grace_ms: default_drag_grace(),
            snap_tolerance_px: default_snap_tolerance(),
            freeze_during_jump: default_true(),
            confirm_jumps: default_true(),
        }
    }
}

impl TimingConfig {
    pub fn jump_delay(&self) -> Duration {
        Duration::from_millis(self.jump_delay_ms)
    }

    pub fn drag_grace(&self) -> Duration {
        Duration::from_millis(self.drag_grace_ms)
    }
}

/// Easing curve used for animated programmatic scrolls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Land on the target in the final frame
    None,
    Linear,
    /// Symmetric ease in and out, the usual page-swipe feel
    #[default]
    EaseInOut,
    /// Fast start, cubic deceleration
    Cubic,
}

/// Smooth scrolling of the host scroll container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl ScrollConfig {
    /// Duration of an animated scroll, zero when smooth scrolling is off
    pub fn animation_duration(&self) -> Duration {
        if self.smooth_enabled {
            Duration::from_millis(self.animation_duration_ms)
        } else {
            Duration::ZERO
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.animation_fps.max(1)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default = "default_indicator_color")]
    pub indicator_color: String,
    #[serde(default = "default_indicator_width")]
    pub indicator_width: f32,
    #[serde(default = "default_indicator_selected_color")]
    pub indicator_selected_color: String,
    #[serde(default = "default_indicator_width")]
    pub indicator_selected_width: f32,
    #[serde(default = "default_indicator_space")]
    pub space_between: f32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            indicator_color: default_indicator_color(),
            indicator_width: default_indicator_width(),
            indicator_selected_color: default_indicator_selected_color(),
            indicator_selected_width: default_indicator_width(),
            space_between: default_indicator_space(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Number of demo pages shown by `carousel run`
    #[serde(default = "default_item_count")]
    pub item_count: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            item_count: default_item_count(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "<S-l>" (Shift+l), "<Space>", "<Left>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_next")]
    pub next: String,
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// Drag content toward the next page
    #[serde(default = "default_key_drag_next")]
    pub drag_next: String,
    /// Drag content toward the previous page
    #[serde(default = "default_key_drag_prev")]
    pub drag_prev: String,
    /// Release an active drag
    #[serde(default = "default_key_release")]
    pub release: String,
    #[serde(default = "default_key_toggle_autoplay")]
    pub toggle_autoplay: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            prev: default_key_prev(),
            drag_next: default_key_drag_next(),
            drag_prev: default_key_drag_prev(),
            release: default_key_release(),
            toggle_autoplay: default_key_toggle_autoplay(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_prev() -> String { "h".to_string() }
fn default_key_drag_next() -> String { "L".to_string() }
fn default_key_drag_prev() -> String { "H".to_string() }
fn default_key_release() -> String { "<Space>".to_string() }
fn default_key_toggle_autoplay() -> String { "a".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_one() -> f32 {
    1.0
}

fn default_pages_per_side() -> usize {
    2
}

fn default_duration() -> u64 {
    1000
}

fn default_width() -> f32 {
    375.0
}

fn default_jump_delay() -> u64 {
    200
}

fn default_drag_grace() -> u64 {
    200
}

fn default_snap_tolerance() -> f32 {
    20.0
}

fn default_scroll_duration() -> u64 {
    250
}

fn default_animation_fps() -> u32 {
    60
}

fn default_indicator_color() -> String {
    "gray".to_string()
}

fn default_indicator_selected_color() -> String {
    "blue".to_string()
}

fn default_indicator_width() -> f32 {
    6.0
}

fn default_indicator_space() -> f32 {
    3.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_item_count() -> usize {
    5
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when missing
    pub fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert!(!config.carousel.loop_enabled);
        assert_eq!(config.carousel.additional_pages_per_side, 2);
        assert_eq!(config.carousel.duration_ms, 1000);
        assert_eq!(config.timing.jump_delay_ms, 200);
        assert_eq!(config.timing.snap_tolerance_px, 20.0);
        assert_eq!(config.indicator.indicator_color, "gray");
    }

    #[test]
    fn test_loop_key_and_alignment() {
        let config = AppConfig::from_toml(
            r#"
            [carousel]
            loop = true
            first_item_alignment = "start"
            animation = "parallax"
            "#,
        )
        .unwrap();
        assert!(config.carousel.loop_enabled);
        assert_eq!(config.carousel.first_item_alignment, FirstItemAlignment::Start);
        assert_eq!(config.carousel.animation, Some(PageAnimation::Parallax));
    }

    #[test]
    fn test_horizontal_padding() {
        let mut config = CarouselConfig {
            slider_width: 400.0,
            item_width: 300.0,
            space_head_tail: 10.0,
            ..Default::default()
        };
        assert_eq!(config.horizontal_padding(), 50.0);

        config.first_item_alignment = FirstItemAlignment::Start;
        assert_eq!(config.horizontal_padding(), 10.0);

        // Looping always centers
        config.loop_enabled = true;
        assert_eq!(config.horizontal_padding(), 50.0);
    }

    #[test]
    fn test_autoplay_requires_loop() {
        let mut config = CarouselConfig {
            auto_play: true,
            ..Default::default()
        };
        assert!(!config.autoplay_enabled());
        config.loop_enabled = true;
        assert!(config.autoplay_enabled());
    }

    #[test]
    fn test_invalid_geometry() {
        let config = CarouselConfig {
            item_width: 0.0,
            ..Default::default()
        };
        assert!(config.validate_geometry().is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.carousel.item_width, config.carousel.item_width);
        assert_eq!(parsed.keymap.release, "<Space>");
    }
}
