//! Extended (loop-padded) page sequence and page rendering

use tracing::error;

use crate::animation::{PageAnimator, PageTransform};
use crate::layout::PageLayout;
use crate::{Error, Result};

/// Placement and animation state of one rendered page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub extended: usize,
    pub actual: usize,
    /// Scroll offset at which this page rests
    pub offset: f32,
    /// Left edge in content coordinates
    pub left: f32,
    /// Container padding `(left, right)`
    pub insets: (f32, f32),
    pub transform: PageTransform,
}

/// Capability a host provides to turn items into views
pub trait PageRenderer<T> {
    type View;

    /// Build the view of `item` for the page described by `frame`
    fn render(&self, item: &T, frame: &PageFrame) -> Self::View;

    /// Stable key of `item`; `None` when the host has no key extractor
    fn key(&self, item: &T, actual: usize) -> Option<String> {
        let _ = (item, actual);
        None
    }
}

/// A rendered page: key, placement and the host view
#[derive(Debug, Clone)]
pub struct RenderedPage<V> {
    pub key: String,
    pub frame: PageFrame,
    /// `None` when no renderer was supplied
    pub view: Option<V>,
}

/// The dataset as physically laid out: head clones, body, tail clones
#[derive(Debug, Clone, Copy)]
pub struct ExtendedSequence<'a, T> {
    items: &'a [T],
    layout: &'a PageLayout,
}

impl<'a, T> ExtendedSequence<'a, T> {
    pub fn new(items: &'a [T], layout: &'a PageLayout) -> Result<Self> {
        if items.len() != layout.dataset_len() {
            return Err(Error::Config(format!(
                "layout built for {} items, dataset has {}",
                layout.dataset_len(),
                items.len()
            )));
        }
        Ok(Self { items, layout })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layout.extended_len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item shown at an extended index
    pub fn get(&self, extended: usize) -> Option<&'a T> {
        if extended >= self.len() {
            return None;
        }
        self.items.get(self.layout.mapper().actual(extended))
    }

    /// All pages with their frames for the current scroll position
    pub fn frames(
        &self,
        animator: &PageAnimator,
        scroll: f32,
        frozen: bool,
    ) -> impl Iterator<Item = (&'a T, PageFrame)> + '_ {
        let layout = self.layout;
        let items = self.items;
        let animator = *animator;
        layout.offsets().iter().enumerate().map(move |(extended, &offset)| {
            let actual = layout.mapper().actual(extended);
            let frame = PageFrame {
                extended,
                actual,
                offset,
                left: layout.page_left(extended),
                insets: layout.page_insets(extended),
                transform: animator.transform(scroll, offset, frozen),
            };
            (&items[actual], frame)
        })
    }

    /// Render every page through `renderer`.
    ///
    /// Keys are `"{key}-{extended}"` so head/tail clones stay distinct. Without
    /// a key extractor the key falls back to `"page-{extended}"`; without a
    /// renderer pages carry no view. Both cases are reported once per call.
    pub fn render<R>(
        &self,
        renderer: Option<&R>,
        animator: &PageAnimator,
        scroll: f32,
        frozen: bool,
    ) -> Vec<RenderedPage<R::View>>
    where
        R: PageRenderer<T>,
    {
        if renderer.is_none() && !self.is_empty() {
            error!("No page renderer supplied, pages render as placeholders");
        }
        let mut missing_key = false;

        let pages = self
            .frames(animator, scroll, frozen)
            .map(|(item, frame)| {
                let key = match renderer.and_then(|r| r.key(item, frame.actual)) {
                    Some(key) => format!("{}-{}", key, frame.extended),
                    None => {
                        missing_key = true;
                        format!("page-{}", frame.extended)
                    }
                };
                RenderedPage {
                    key,
                    view: renderer.map(|r| r.render(item, &frame)),
                    frame,
                }
            })
            .collect();

        if missing_key {
            error!("Page renderer has no key extractor, falling back to positional keys");
        }
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;

    struct Labels;

    impl PageRenderer<&'static str> for Labels {
        type View = String;

        fn render(&self, item: &&'static str, frame: &PageFrame) -> String {
            format!("{}@{}", item, frame.extended)
        }

        fn key(&self, item: &&'static str, _actual: usize) -> Option<String> {
            Some(item.to_string())
        }
    }

    struct Unkeyed;

    impl PageRenderer<&'static str> for Unkeyed {
        type View = ();

        fn render(&self, _item: &&'static str, _frame: &PageFrame) {}
    }

    fn looping_config() -> CarouselConfig {
        CarouselConfig {
            loop_enabled: true,
            additional_pages_per_side: 1,
            slider_width: 100.0,
            item_width: 100.0,
            ..Default::default()
        }
    }

    const ITEMS: [&str; 4] = ["a", "b", "c", "d"];

    #[test]
    fn test_clones_wrap_dataset() {
        let layout = PageLayout::build(&looping_config(), ITEMS.len()).unwrap();
        let seq = ExtendedSequence::new(&ITEMS, &layout).unwrap();
        let shown: Vec<_> = (0..seq.len()).filter_map(|i| seq.get(i).copied()).collect();
        assert_eq!(shown, vec!["d", "a", "b", "c", "d", "a"]);
        assert!(seq.get(6).is_none());
    }

    #[test]
    fn test_render_keys_are_unique() {
        let layout = PageLayout::build(&looping_config(), ITEMS.len()).unwrap();
        let seq = ExtendedSequence::new(&ITEMS, &layout).unwrap();
        let animator = PageAnimator::new(&looping_config());
        let pages = seq.render(Some(&Labels), &animator, 100.0, false);

        let keys: Vec<_> = pages.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["d-0", "a-1", "b-2", "c-3", "d-4", "a-5"]);
        assert_eq!(pages[1].view.as_deref(), Some("a@1"));
        assert_eq!(pages[1].frame.transform, PageTransform::NEUTRAL);
    }

    #[test]
    fn test_missing_key_and_renderer_fall_back() {
        let layout = PageLayout::build(&looping_config(), ITEMS.len()).unwrap();
        let seq = ExtendedSequence::new(&ITEMS, &layout).unwrap();
        let animator = PageAnimator::new(&looping_config());

        let pages = seq.render(Some(&Unkeyed), &animator, 0.0, false);
        assert_eq!(pages[2].key, "page-2");

        let pages = seq.render::<Labels>(None, &animator, 0.0, false);
        assert!(pages.iter().all(|p| p.view.is_none()));
    }

    #[test]
    fn test_mismatched_layout_is_rejected() {
        let layout = PageLayout::build(&looping_config(), 5).unwrap();
        assert!(ExtendedSequence::new(&ITEMS, &layout).is_err());
    }
}
