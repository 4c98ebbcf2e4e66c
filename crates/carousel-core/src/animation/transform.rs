use crate::config::{CarouselConfig, PageAnimation};

use super::timing::interpolate_clamped;

/// Visual state of one page for a given scroll position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    pub scale: f32,
    pub opacity: f32,
    /// Horizontal parallax shift in pixels
    pub translate_x: f32,
}

impl PageTransform {
    pub const NEUTRAL: Self = Self {
        scale: 1.0,
        opacity: 1.0,
        translate_x: 0.0,
    };
}

/// Per-page animation parameters taken from the carousel configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageAnimator {
    item_width: f32,
    inactive_scale: f32,
    inactive_opacity: f32,
    parallax: bool,
}

impl PageAnimator {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            item_width: config.item_width,
            inactive_scale: config.inactive_scale,
            inactive_opacity: config.inactive_opacity,
            parallax: config.animation == Some(PageAnimation::Parallax),
        }
    }

    /// Transform of the page resting at `page_offset` when the container is
    /// scrolled to `scroll`. A frozen carousel is mid-jump and renders every
    /// page neutral so the reposition stays invisible.
    pub fn transform(&self, scroll: f32, page_offset: f32, frozen: bool) -> PageTransform {
        if frozen {
            return PageTransform::NEUTRAL;
        }

        let w = self.item_width;
        let input = [page_offset - w, page_offset, page_offset + w];

        let scale = interpolate_clamped(
            scroll,
            input,
            [self.inactive_scale, 1.0, self.inactive_scale],
        );
        let opacity = interpolate_clamped(
            scroll,
            input,
            [self.inactive_opacity, 1.0, self.inactive_opacity],
        );
        let translate_x = if self.parallax {
            interpolate_clamped(scroll, input, [-w / 2.0, 0.0, w / 4.0])
        } else {
            0.0
        };

        PageTransform {
            scale,
            opacity,
            translate_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> PageAnimator {
        PageAnimator::new(&CarouselConfig {
            item_width: 100.0,
            inactive_scale: 0.8,
            inactive_opacity: 0.5,
            animation: Some(PageAnimation::Parallax),
            ..Default::default()
        })
    }

    #[test]
    fn test_resting_page_is_neutral() {
        assert_eq!(animator().transform(300.0, 300.0, false), PageTransform::NEUTRAL);
    }

    #[test]
    fn test_adjacent_page_is_inactive() {
        let t = animator().transform(200.0, 300.0, false);
        assert!((t.scale - 0.8).abs() < 1e-6);
        assert!((t.opacity - 0.5).abs() < 1e-6);
        assert!((t.translate_x + 50.0).abs() < 1e-6);

        let t = animator().transform(400.0, 300.0, false);
        assert!((t.translate_x - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_far_pages_clamp() {
        let t = animator().transform(0.0, 300.0, false);
        assert!((t.scale - 0.8).abs() < 1e-6);
        assert!((t.translate_x + 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_frozen_is_neutral() {
        assert_eq!(animator().transform(250.0, 300.0, true), PageTransform::NEUTRAL);
    }

    #[test]
    fn test_no_parallax_without_animation() {
        let animator = PageAnimator::new(&CarouselConfig {
            item_width: 100.0,
            ..Default::default()
        });
        assert_eq!(animator.transform(250.0, 300.0, false).translate_x, 0.0);
    }
}
