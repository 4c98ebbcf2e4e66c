/// Find the page whose offset is closest to `offset`.
///
/// Binary search brackets `offset` between two adjacent entries of the sorted
/// `offsets`; ties resolve to the lower index. Returns `None` when the
/// closest candidate is `tolerance` or further away, i.e. the position is
/// still between snap points. Runs on every scroll sample, so it stays
/// allocation-free.
pub fn find_nearest_page(offset: f32, offsets: &[f32], tolerance: f32) -> Option<usize> {
    if offsets.is_empty() {
        return None;
    }

    let mut lo = 0;
    let mut hi = offsets.len() - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if offsets[mid] < offset {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let nearest = if offset - offsets[lo] <= offsets[hi] - offset {
        lo
    } else {
        hi
    };

    if (offsets[nearest] - offset).abs() < tolerance {
        Some(nearest)
    } else {
        None
    }
}

/// Index of the snap point closest to `offset`, regardless of distance
pub fn closest_snap_point(offset: f32, offsets: &[f32]) -> Option<usize> {
    find_nearest_page(offset, offsets, f32::INFINITY)
}
