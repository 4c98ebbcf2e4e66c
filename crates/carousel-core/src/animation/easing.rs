//! Easing curves mapping progress in [0, 1] to eased progress in [0, 1]

pub use crate::config::EasingType;

impl EasingType {
    /// Eased progress for linear progress `t`; input outside [0, 1] is clamped
    pub fn ease(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::EaseInOut => smoothstep(t),
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Hermite smoothstep: 3t² - 2t³
#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 3] = [EasingType::Linear, EasingType::EaseInOut, EasingType::Cubic];

    #[test]
    fn test_curves_start_at_zero_and_end_at_one() {
        for easing in CURVES {
            assert_eq!(easing.ease(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.ease(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_curves_never_move_backwards() {
        for easing in CURVES {
            let samples: Vec<f32> = (0..=20).map(|i| easing.ease(i as f32 / 20.0)).collect();
            assert!(samples.windows(2).all(|w| w[1] >= w[0]), "{:?}", easing);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let e = EasingType::EaseInOut;
        assert_eq!(e.ease(0.5), 0.5);
        assert!((e.ease(0.2) + e.ease(0.8) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_none_holds_until_done() {
        assert_eq!(EasingType::None.ease(0.99), 0.0);
        assert_eq!(EasingType::None.ease(1.0), 1.0);
        assert_eq!(EasingType::Linear.ease(3.0), 1.0);
    }
}
