use std::time::Duration;

use tokio::time::Instant;

use super::easing::EasingType;
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone, Copy)]
struct ActiveTween {
    start: Instant,
    from: f32,
    to: f32,
    duration: Duration,
    easing: EasingType,
}

/// Eased transition of one value.
///
/// Call `animate_to()` to start moving toward a target, then `update()` each
/// frame to read the interpolated value. Retargeting mid-flight starts from
/// the currently visible value.
#[derive(Debug, Clone)]
pub struct Tween {
    animation: Option<ActiveTween>,
    current: f32,
}

impl Tween {
    pub fn new(value: f32) -> Self {
        Self {
            animation: None,
            current: value,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Last computed value
    #[inline]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Final value once the running animation completes
    pub fn target(&self) -> f32 {
        self.animation.map(|a| a.to).unwrap_or(self.current)
    }

    /// Jump to `value` without animating
    pub fn set(&mut self, value: f32) {
        self.animation = None;
        self.current = value;
    }

    /// Start animating toward `to`
    pub fn animate_to(&mut self, to: f32, duration: Duration, easing: EasingType) {
        if duration.is_zero() || (to - self.current).abs() < f32::EPSILON {
            self.set(to);
            return;
        }
        self.animation = Some(ActiveTween {
            start: Instant::now(),
            from: self.current,
            to,
            duration,
            easing,
        });
    }

    /// Advance the animation and return the current value
    pub fn update(&mut self) -> f32 {
        if let Some(anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = anim.easing.ease(progress(anim.start, anim.duration));
                self.current = lerp(anim.from, anim.to, t);
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tween_reaches_target() {
        let mut tween = Tween::new(0.0);
        tween.animate_to(100.0, Duration::from_millis(100), EasingType::Linear);
        assert!(tween.is_animating());
        assert_eq!(tween.target(), 100.0);

        tokio::time::advance(Duration::from_millis(50)).await;
        let mid = tween.update();
        assert!((mid - 50.0).abs() < 1.0, "mid = {}", mid);

        tokio::time::advance(Duration::from_millis(60)).await;
        assert_eq!(tween.update(), 100.0);
        assert!(!tween.is_animating());
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut tween = Tween::new(10.0);
        tween.animate_to(40.0, Duration::ZERO, EasingType::Cubic);
        assert!(!tween.is_animating());
        assert_eq!(tween.value(), 40.0);
    }
}
