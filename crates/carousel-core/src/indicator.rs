//! Page indicator: one dot per actual page plus a sliding selection marker

use std::time::Duration;

use tracing::warn;

use crate::animation::{EasingType, Tween};
use crate::config::IndicatorConfig;

/// Geometry of a single dot slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub page: usize,
    /// Slot width: the selected width for the current page
    pub width: f32,
    pub selected: bool,
}

/// Static layout of the indicator for a given page
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorLayout {
    pub dots: Vec<Dot>,
    /// Resting x-position of the selection marker
    pub marker_x: f32,
    pub dot_size: f32,
}

/// Compute the indicator layout for `current` out of `total` pages
pub fn indicator_layout(config: &IndicatorConfig, current: usize, total: usize) -> IndicatorLayout {
    let dots = (0..total)
        .map(|page| {
            let selected = page == current;
            Dot {
                page,
                width: if selected {
                    config.indicator_selected_width
                } else {
                    config.indicator_width
                },
                selected,
            }
        })
        .collect();

    IndicatorLayout {
        dots,
        marker_x: marker_position(config, current),
        dot_size: config.indicator_width,
    }
}

/// Resting x-position of the selection marker for page `current`
pub fn marker_position(config: &IndicatorConfig, current: usize) -> f32 {
    current as f32 * (config.indicator_width + config.space_between)
}

/// Animated indicator state
#[derive(Debug, Clone)]
pub struct PageIndicator {
    config: IndicatorConfig,
    marker: Tween,
    current: usize,
    total: usize,
}

impl PageIndicator {
    const MARKER_DURATION: Duration = Duration::from_millis(180);

    pub fn new(config: IndicatorConfig) -> Self {
        if config.indicator_width <= 0.0 || config.indicator_selected_width <= 0.0 {
            warn!(
                "Indicator widths must be positive (indicator_width={}, indicator_selected_width={})",
                config.indicator_width, config.indicator_selected_width
            );
        }
        if config.space_between < 0.0 {
            warn!("Indicator space_between is negative: {}", config.space_between);
        }
        Self {
            config,
            marker: Tween::new(0.0),
            current: 0,
            total: 0,
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Move the selection to `current`; the marker slides there
    pub fn set_page(&mut self, current: usize, total: usize) {
        self.total = total;
        if current == self.current {
            return;
        }
        self.current = current;
        self.marker.animate_to(
            marker_position(&self.config, current),
            Self::MARKER_DURATION,
            EasingType::Cubic,
        );
    }

    /// Advance the marker animation, returns its current x-position
    pub fn update(&mut self) -> f32 {
        self.marker.update()
    }

    pub fn is_animating(&self) -> bool {
        self.marker.is_animating()
    }

    pub fn layout(&self) -> IndicatorLayout {
        let mut layout = indicator_layout(&self.config, self.current, self.total);
        layout.marker_x = self.marker.value();
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_marks_current_page() {
        let config = IndicatorConfig {
            indicator_selected_width: 12.0,
            ..Default::default()
        };
        let layout = indicator_layout(&config, 2, 4);
        assert_eq!(layout.dots.len(), 4);
        assert!(layout.dots[2].selected);
        assert_eq!(layout.dots[2].width, 12.0);
        assert_eq!(layout.dots[1].width, 6.0);
        assert_eq!(layout.marker_x, 18.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_marker_slides_to_page() {
        let mut indicator = PageIndicator::new(IndicatorConfig::default());
        indicator.set_page(3, 5);
        assert!(indicator.is_animating());

        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(indicator.update(), 27.0);
        assert_eq!(indicator.layout().marker_x, 27.0);
    }
}
