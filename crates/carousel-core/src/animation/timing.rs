//! Time and interpolation helpers shared by tweens and page transforms

use std::time::Duration;

use tokio::time::Instant;

/// Calculate animation progress (0.0 to 1.0) from start time and duration
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = start.elapsed().as_secs_f32() / duration.as_secs_f32();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Piecewise-linear interpolation of `value` over an ascending three-point
/// input range, clamped at both ends
pub fn interpolate_clamped(value: f32, input: [f32; 3], output: [f32; 3]) -> f32 {
    if value <= input[0] {
        return output[0];
    }
    if value >= input[2] {
        return output[2];
    }
    let segment = if value <= input[1] { 0 } else { 1 };
    let (x0, x1) = (input[segment], input[segment + 1]);
    let span = x1 - x0;
    if span <= f32::EPSILON {
        return output[segment + 1];
    }
    lerp(output[segment], output[segment + 1], (value - x0) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(Instant::now(), Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_interpolate_clamped() {
        let input = [0.0, 100.0, 200.0];
        let output = [0.5, 1.0, 0.5];
        assert_eq!(interpolate_clamped(-50.0, input, output), 0.5);
        assert_eq!(interpolate_clamped(100.0, input, output), 1.0);
        assert!((interpolate_clamped(50.0, input, output) - 0.75).abs() < 1e-6);
        assert!((interpolate_clamped(150.0, input, output) - 0.75).abs() < 1e-6);
        assert_eq!(interpolate_clamped(500.0, input, output), 0.5);
    }
}
