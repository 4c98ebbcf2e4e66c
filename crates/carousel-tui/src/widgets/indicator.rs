use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use carousel_core::indicator::IndicatorLayout;
use carousel_core::IndicatorConfig;

use crate::app::App;
use crate::theme::parse_color;

/// Dot row under the carousel. Widths and spacing are in pixels; one cell
/// per `indicator_width` pixels, at least one per dot.
pub struct IndicatorWidget;

impl IndicatorWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let layout = app.indicator.layout();
        let line = Self::line(app.indicator.config(), &layout);
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().bg(app.theme.bg0));
        frame.render_widget(paragraph, area);
    }

    pub fn line(config: &IndicatorConfig, layout: &IndicatorLayout) -> Line<'static> {
        let unit = config.indicator_width.max(1.0);
        let gap = " ".repeat((config.space_between / unit).round().max(1.0) as usize);
        let color = parse_color(&config.indicator_color);
        let selected_color = parse_color(&config.indicator_selected_color);
        let slot = (config.indicator_width + config.space_between).max(1.0);
        let marker_slot = (layout.marker_x / slot).round() as usize;

        let mut spans = Vec::with_capacity(layout.dots.len() * 2);
        for (i, dot) in layout.dots.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(gap.clone()));
            }
            let cells = (dot.width / unit).round().max(1.0) as usize;
            let span = if dot.page == marker_slot {
                Span::styled("●".repeat(cells), Style::default().fg(selected_color))
            } else {
                Span::styled("○".repeat(cells), Style::default().fg(color))
            };
            spans.push(span);
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::indicator::indicator_layout;

    #[test]
    fn test_line_marks_selected_dot() {
        let config = IndicatorConfig::default();
        let layout = indicator_layout(&config, 1, 3);
        let line = IndicatorWidget::line(&config, &layout);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "○ ● ○");
    }

    #[test]
    fn test_wide_selected_dot() {
        let config = IndicatorConfig {
            indicator_selected_width: 12.0,
            ..Default::default()
        };
        let layout = indicator_layout(&config, 0, 2);
        let line = IndicatorWidget::line(&config, &layout);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "●● ○");
    }
}
