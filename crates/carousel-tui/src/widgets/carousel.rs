use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::warn;

use carousel_core::sequence::{ExtendedSequence, PageFrame, PageRenderer};

use crate::app::{App, Slide};
use crate::theme::Theme;

/// Terminal view of one page
#[derive(Debug, Clone, PartialEq)]
pub struct SlideCard {
    pub title: String,
    pub body: String,
    pub color: Color,
    pub dimmed: bool,
    pub frame: PageFrame,
}

/// Renders slides as bordered cards colored by their dataset index
pub struct SlideRenderer<'a> {
    theme: &'a Theme,
}

impl<'a> SlideRenderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl PageRenderer<Slide> for SlideRenderer<'_> {
    type View = SlideCard;

    fn render(&self, item: &Slide, frame: &PageFrame) -> SlideCard {
        SlideCard {
            title: item.title.clone(),
            body: item.body.clone(),
            color: self.theme.card(frame.actual),
            dimmed: frame.transform.opacity < 0.75,
            frame: *frame,
        }
    }

    fn key(&self, item: &Slide, _actual: usize) -> Option<String> {
        Some(item.title.clone())
    }
}

/// Columns `(x, width)` a page occupies inside a viewport `width` cells wide
pub fn card_columns(
    frame: &PageFrame,
    scroll: f32,
    item_width: f32,
    cells_per_px: f32,
    width: u16,
) -> Option<(u16, u16)> {
    let (inset_left, inset_right) = frame.insets;
    let slot = (item_width - inset_left - inset_right).max(0.0);
    let card = slot * frame.transform.scale;
    let left = frame.left - scroll + inset_left + (slot - card) / 2.0 + frame.transform.translate_x;

    let x0 = (left * cells_per_px).round() as i32;
    let x1 = ((left + card) * cells_per_px).round() as i32;
    let x0 = x0.clamp(0, width as i32);
    let x1 = x1.clamp(0, width as i32);
    if x1 <= x0 {
        return None;
    }
    Some((x0 as u16, (x1 - x0) as u16))
}

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status = app.status();
        let layout = &status.layout;
        let sequence = match ExtendedSequence::new(&app.slides, layout) {
            Ok(sequence) => sequence,
            Err(e) => {
                warn!("Skipping carousel frame: {}", e);
                return;
            }
        };

        let background = Block::default().style(Style::default().bg(app.theme.bg0));
        frame.render_widget(background, area);

        if sequence.is_empty() {
            let empty = Paragraph::new("No pages")
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.grey1));
            frame.render_widget(empty, area);
            return;
        }

        let scroll = app.view.offset();
        let cells_per_px = area.width as f32 / layout.slider_width().max(1.0);
        let renderer = SlideRenderer::new(&app.theme);

        for page in sequence.render(Some(&renderer), &app.animator, scroll, status.frozen) {
            let Some(card) = page.view else { continue };
            let Some((x, width)) =
                card_columns(&card.frame, scroll, layout.item_width(), cells_per_px, area.width)
            else {
                continue;
            };

            let height = ((area.height as f32) * card.frame.transform.scale).round() as u16;
            let height = height.clamp(1, area.height);
            let y = area.y + (area.height - height) / 2;
            let rect = Rect::new(area.x + x, y, width, height);
            Self::render_card(frame, rect, &card, app.theme.fg0);
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, card: &SlideCard, fg: Color) {
        let mut style = Style::default().fg(card.color);
        if card.dimmed {
            style = style.add_modifier(Modifier::DIM);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(Span::styled(format!(" {} ", card.title), style.add_modifier(Modifier::BOLD)));

        let inner_height = area.height.saturating_sub(2);
        let mut lines = vec![Line::from(""); (inner_height / 2).saturating_sub(1) as usize];
        lines.push(Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(card.body.clone(), Style::default().fg(fg))));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::animation::PageTransform;

    fn frame(left: f32, transform: PageTransform) -> PageFrame {
        PageFrame {
            extended: 1,
            actual: 0,
            offset: 0.0,
            left,
            insets: (0.0, 0.0),
            transform,
        }
    }

    #[test]
    fn test_centered_page_fills_its_slot() {
        // 375px slider, 300px pages, 75 cells wide: 0.2 cells per px
        let page = frame(337.5, PageTransform::NEUTRAL);
        assert_eq!(card_columns(&page, 300.0, 300.0, 0.2, 75), Some((8, 60)));
    }

    #[test]
    fn test_scaled_page_shrinks_around_center() {
        let page = frame(0.0, PageTransform { scale: 0.5, ..PageTransform::NEUTRAL });
        assert_eq!(card_columns(&page, 0.0, 100.0, 1.0, 200), Some((25, 50)));
    }

    #[test]
    fn test_offscreen_page_is_skipped() {
        let page = frame(500.0, PageTransform::NEUTRAL);
        assert_eq!(card_columns(&page, 0.0, 100.0, 1.0, 100), None);
    }

    #[test]
    fn test_partially_visible_page_is_clipped() {
        let page = frame(50.0, PageTransform::NEUTRAL);
        assert_eq!(card_columns(&page, 0.0, 100.0, 1.0, 100), Some((50, 50)));
    }

    #[test]
    fn test_renderer_keys_by_title() {
        let theme = Theme::default();
        let renderer = SlideRenderer::new(&theme);
        let slide = Slide {
            title: "Slide 1".to_string(),
            body: String::new(),
        };
        assert_eq!(renderer.key(&slide, 0).as_deref(), Some("Slide 1"));
        let card = renderer.render(&slide, &frame(0.0, PageTransform::NEUTRAL));
        assert_eq!(card.color, theme.card(0));
        assert!(!card.dimmed);
    }
}
