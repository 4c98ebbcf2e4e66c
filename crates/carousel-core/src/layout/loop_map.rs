use crate::{Error, Result};

/// Mapping between the loop-padded (extended) sequence and the dataset.
///
/// When looping, `pad` clones of the tail are rendered before the first item
/// and `pad` clones of the head after the last one. Resting on either outermost
/// clone requires a silent jump back into the body of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopMapper {
    len: usize,
    pad: usize,
    looping: bool,
}

impl LoopMapper {
    /// Build the mapper for a dataset of `len` items.
    ///
    /// Looping requires `1 <= pad` and `2 * pad < len`, otherwise the jump
    /// targets would land on clones of the boundary pages themselves.
    pub fn build(len: usize, pad: usize, looping: bool) -> Result<Self> {
        if looping && (pad == 0 || pad * 2 >= len) {
            return Err(Error::InvalidPadding { pad, len });
        }
        Ok(Self {
            len,
            pad: if looping { pad } else { 0 },
            looping,
        })
    }

    /// Identity mapping without loop padding
    pub fn identity(len: usize) -> Self {
        Self {
            len,
            pad: 0,
            looping: false,
        }
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Number of real items
    #[inline]
    pub fn dataset_len(&self) -> usize {
        self.len
    }

    /// Clone pages on each side (0 when not looping)
    #[inline]
    pub fn pad(&self) -> usize {
        self.pad
    }

    /// Number of physically rendered pages
    #[inline]
    pub fn extended_len(&self) -> usize {
        self.len + 2 * self.pad
    }

    /// Actual dataset index shown at `extended`
    #[inline]
    pub fn actual(&self, extended: usize) -> usize {
        if self.looping {
            (self.len - self.pad + extended) % self.len
        } else {
            extended
        }
    }

    /// Extended index of an actual index inside the non-clone body
    #[inline]
    pub fn body_index(&self, actual: usize) -> usize {
        actual + self.pad
    }

    #[inline]
    pub fn is_left_boundary(&self, extended: usize) -> bool {
        self.looping && extended == 0
    }

    #[inline]
    pub fn is_right_boundary(&self, extended: usize) -> bool {
        self.looping && extended + 1 == self.extended_len()
    }

    /// Where to jump to when resting on `extended`, if it is a boundary clone
    pub fn jump_target(&self, extended: usize) -> Option<usize> {
        if self.is_left_boundary(extended) {
            Some(self.left_jump_target())
        } else if self.is_right_boundary(extended) {
            Some(self.right_jump_target())
        } else {
            None
        }
    }

    /// Re-entry point after resting on the leftmost clone
    pub fn left_jump_target(&self) -> usize {
        self.extended_len() - 2 * self.pad
    }

    /// Re-entry point after resting on the rightmost clone
    pub fn right_jump_target(&self) -> usize {
        2 * self.pad - 1
    }

    /// The extended index showing `actual` closest to `from`; ties go low
    pub fn nearest_extended(&self, actual: usize, from: usize) -> Option<usize> {
        (0..self.extended_len())
            .filter(|&i| self.actual(i) == actual)
            .min_by_key(|&i| i.abs_diff(from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_without_loop() {
        let mapper = LoopMapper::build(4, 2, false).unwrap();
        assert_eq!(mapper.extended_len(), 4);
        assert_eq!(mapper.pad(), 0);
        for i in 0..4 {
            assert_eq!(mapper.actual(i), i);
            assert_eq!(mapper.jump_target(i), None);
        }
    }

    #[test]
    fn test_loop_mapping() {
        let mapper = LoopMapper::build(5, 1, true).unwrap();
        assert_eq!(mapper.extended_len(), 7);
        let actual: Vec<_> = (0..7).map(|i| mapper.actual(i)).collect();
        assert_eq!(actual, vec![4, 0, 1, 2, 3, 4, 0]);
        assert_eq!(mapper.jump_target(0), Some(5));
        assert_eq!(mapper.jump_target(6), Some(1));
        assert_eq!(mapper.jump_target(3), None);
    }

    #[test]
    fn test_jump_targets_show_the_same_item() {
        for len in 3..12 {
            for pad in 1..=(len - 1) / 2 {
                let mapper = LoopMapper::build(len, pad, true).unwrap();
                let last = mapper.extended_len() - 1;
                assert_eq!(mapper.actual(0), mapper.actual(mapper.left_jump_target()));
                assert_eq!(mapper.actual(last), mapper.actual(mapper.right_jump_target()));
                assert!(!mapper.is_left_boundary(mapper.left_jump_target()));
                assert!(!mapper.is_right_boundary(mapper.right_jump_target()));
            }
        }
    }

    #[test]
    fn test_surjective_and_body_bounds() {
        for len in 3..12 {
            for pad in 1..=(len - 1) / 2 {
                let mapper = LoopMapper::build(len, pad, true).unwrap();
                let mut seen = vec![false; len];
                for i in 0..mapper.extended_len() {
                    seen[mapper.actual(i)] = true;
                }
                assert!(seen.iter().all(|&s| s), "len={} pad={}", len, pad);
                assert_eq!(mapper.actual(pad), 0);
                assert_eq!(mapper.actual(pad + len - 1), len - 1);
            }
        }
    }

    #[test]
    fn test_invalid_padding() {
        assert!(matches!(
            LoopMapper::build(4, 2, true),
            Err(Error::InvalidPadding { pad: 2, len: 4 })
        ));
        assert!(LoopMapper::build(5, 0, true).is_err());
        assert!(LoopMapper::build(0, 1, true).is_err());
        assert!(LoopMapper::build(0, 1, false).is_ok());
    }

    #[test]
    fn test_nearest_extended() {
        let mapper = LoopMapper::build(5, 2, true).unwrap();
        // actual 4 lives at extended 1 and 6
        assert_eq!(mapper.nearest_extended(4, 2), Some(1));
        assert_eq!(mapper.nearest_extended(4, 5), Some(6));
        // actual 0 lives at 2 and 7
        assert_eq!(mapper.nearest_extended(0, 7), Some(7));
        assert_eq!(mapper.nearest_extended(9, 0), None);
    }
}
