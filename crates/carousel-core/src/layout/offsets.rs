//! Resting scroll offset of every page.

/// Inputs of the offset table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetGeometry {
    pub slider_width: f32,
    pub item_width: f32,
    pub item_count: usize,
    /// Content inset applied on both ends of the scroll container
    pub horizontal_padding: f32,
}

/// Compute the scroll offset at which each page rests.
///
/// A centered page needs `(slider_width - item_width) / 2` of leading space;
/// the content inset provides `horizontal_padding` of it. Middle pages are
/// shifted back by the missing amount, the last page by twice that amount so
/// it is reachable without extra trailing scroll space. The result is clamped
/// into the reachable scroll range, which keeps it non-decreasing.
pub fn generate_offsets(geometry: &OffsetGeometry) -> Vec<f32> {
    let OffsetGeometry {
        slider_width,
        item_width,
        item_count,
        horizontal_padding,
    } = *geometry;

    let deficit = (slider_width - item_width) / 2.0 - horizontal_padding;
    let last = item_count.saturating_sub(1);
    let max_offset = (last as f32 * item_width - 2.0 * deficit).max(0.0);

    (0..item_count)
        .map(|i| {
            if i == 0 {
                0.0
            } else if i == last {
                max_offset
            } else {
                (i as f32 * item_width - deficit).clamp(0.0, max_offset)
            }
        })
        .collect()
}

/// Horizontal padding of a page container: `(left, right)`.
///
/// Start-aligned carousels keep their outermost pages flush with the content
/// edges; otherwise every page gets half the gap on each side.
pub fn page_insets(index: usize, count: usize, space_between: f32, start_aligned: bool) -> (f32, f32) {
    let half = space_between / 2.0;
    if !start_aligned {
        return (half, half);
    }
    let left = if index == 0 { 0.0 } else { half };
    let right = if index + 1 == count { 0.0 } else { half };
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(slider: f32, item: f32, count: usize, padding: f32) -> OffsetGeometry {
        OffsetGeometry {
            slider_width: slider,
            item_width: item,
            item_count: count,
            horizontal_padding: padding,
        }
    }

    #[test]
    fn test_centered_offsets_are_multiples_of_item_width() {
        let offsets = generate_offsets(&geometry(400.0, 300.0, 4, 50.0));
        assert_eq!(offsets, vec![0.0, 300.0, 600.0, 900.0]);
    }

    #[test]
    fn test_start_aligned_offsets() {
        // No inset: deficit is 50, middle pages shift by 50, last by 100
        let offsets = generate_offsets(&geometry(400.0, 300.0, 4, 0.0));
        assert_eq!(offsets, vec![0.0, 250.0, 550.0, 800.0]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(generate_offsets(&geometry(400.0, 300.0, 0, 0.0)).is_empty());
        assert_eq!(generate_offsets(&geometry(400.0, 300.0, 1, 0.0)), vec![0.0]);
    }

    #[test]
    fn test_offsets_start_at_zero_and_never_decrease() {
        for slider in [100.0_f32, 320.0, 375.0, 800.0] {
            for item in [50.0_f32, 100.0, 300.0, 375.0] {
                if item > slider {
                    continue;
                }
                for count in 1..12 {
                    for padding in [0.0, 10.0, (slider - item) / 2.0] {
                        let offsets = generate_offsets(&geometry(slider, item, count, padding));
                        assert_eq!(offsets[0], 0.0);
                        assert!(
                            offsets.windows(2).all(|w| w[0] <= w[1]),
                            "not monotonic: {:?}",
                            offsets
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_page_insets() {
        assert_eq!(page_insets(0, 3, 10.0, false), (5.0, 5.0));
        assert_eq!(page_insets(0, 3, 10.0, true), (0.0, 5.0));
        assert_eq!(page_insets(1, 3, 10.0, true), (5.0, 5.0));
        assert_eq!(page_insets(2, 3, 10.0, true), (5.0, 0.0));
    }
}
