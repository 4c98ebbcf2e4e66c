//! Derived page geometry
//!
//! The offset table and the loop mapper are pure functions of the carousel
//! configuration and the dataset length. They are rebuilt together into a
//! [`PageLayout`] snapshot and swapped as one value, so readers never observe
//! a new offset table paired with a stale mapper.

mod loop_map;
mod nearest;
mod offsets;

pub use loop_map::LoopMapper;
pub use nearest::{closest_snap_point, find_nearest_page};
pub use offsets::{generate_offsets, page_insets, OffsetGeometry};

use crate::config::{CarouselConfig, FirstItemAlignment};
use crate::Result;

/// Immutable snapshot of offsets and page mapping
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    offsets: Vec<f32>,
    mapper: LoopMapper,
    item_width: f32,
    slider_width: f32,
    horizontal_padding: f32,
    space_between: f32,
    start_aligned: bool,
}

impl PageLayout {
    /// Build the snapshot for a dataset of `item_count` items
    pub fn build(config: &CarouselConfig, item_count: usize) -> Result<Self> {
        config.validate_geometry()?;
        let mapper = LoopMapper::build(
            item_count,
            config.additional_pages_per_side,
            config.loop_enabled,
        )?;
        let horizontal_padding = config.horizontal_padding();
        let offsets = generate_offsets(&OffsetGeometry {
            slider_width: config.slider_width,
            item_width: config.item_width,
            item_count: mapper.extended_len(),
            horizontal_padding,
        });

        Ok(Self {
            offsets,
            mapper,
            item_width: config.item_width,
            slider_width: config.slider_width,
            horizontal_padding,
            space_between: config.space_between,
            start_aligned: config.first_item_alignment == FirstItemAlignment::Start,
        })
    }

    /// Layout for an empty dataset
    pub fn empty(config: &CarouselConfig) -> Self {
        Self {
            offsets: Vec::new(),
            mapper: LoopMapper::identity(0),
            item_width: config.item_width,
            slider_width: config.slider_width,
            horizontal_padding: config.horizontal_padding(),
            space_between: config.space_between,
            start_aligned: config.first_item_alignment == FirstItemAlignment::Start,
        }
    }

    #[inline]
    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }

    #[inline]
    pub fn mapper(&self) -> &LoopMapper {
        &self.mapper
    }

    /// Resting offset of an extended page
    #[inline]
    pub fn offset_of(&self, extended: usize) -> Option<f32> {
        self.offsets.get(extended).copied()
    }

    #[inline]
    pub fn extended_len(&self) -> usize {
        self.mapper.extended_len()
    }

    #[inline]
    pub fn dataset_len(&self) -> usize {
        self.mapper.dataset_len()
    }

    #[inline]
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    #[inline]
    pub fn slider_width(&self) -> f32 {
        self.slider_width
    }

    #[inline]
    pub fn horizontal_padding(&self) -> f32 {
        self.horizontal_padding
    }

    /// Total scrollable content width, insets included
    pub fn content_width(&self) -> f32 {
        self.horizontal_padding * 2.0 + self.item_width * self.extended_len() as f32
    }

    /// Left edge of an extended page in content coordinates
    pub fn page_left(&self, extended: usize) -> f32 {
        self.horizontal_padding + self.item_width * extended as f32
    }

    /// Container padding `(left, right)` of an extended page
    pub fn page_insets(&self, extended: usize) -> (f32, f32) {
        page_insets(
            extended,
            self.extended_len(),
            self.space_between,
            self.start_aligned,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_extended_sequence() {
        let config = CarouselConfig {
            loop_enabled: true,
            additional_pages_per_side: 1,
            slider_width: 400.0,
            item_width: 300.0,
            ..Default::default()
        };
        let layout = PageLayout::build(&config, 5).unwrap();
        assert_eq!(layout.extended_len(), 7);
        assert_eq!(layout.offsets().len(), 7);
        assert_eq!(layout.offset_of(5), Some(1500.0));
        assert_eq!(layout.content_width(), 100.0 + 2100.0);
    }

    #[test]
    fn test_invalid_padding_is_rejected() {
        let config = CarouselConfig {
            loop_enabled: true,
            additional_pages_per_side: 2,
            ..Default::default()
        };
        assert!(PageLayout::build(&config, 4).is_err());
        assert!(PageLayout::build(&config, 5).is_ok());
    }
}
