use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use carousel_core::Phase;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status = app.status();
        let phase = match status.phase {
            Phase::Idle => "IDLE",
            Phase::Dragging => "DRAG",
            Phase::Settling => "SETTLE",
            Phase::Jumping => "JUMP",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", phase, msg)
        } else {
            format!(
                " {} | Page {}/{} | Autoplay: {}",
                phase,
                status.current + 1,
                status.total,
                if app.autoplay { "on" } else { "off" }
            )
        };

        let help_hint = " q:quit h/l:page H/L:drag <Space>:release 1-9:jump a:autoplay ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;
        let bar = Style::default().bg(app.theme.bg2);
        let phase_style = if status.frozen {
            bar.fg(app.theme.warning)
        } else {
            bar.fg(app.theme.fg0)
        };

        let line = Line::from(vec![
            Span::styled(status_text, phase_style),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(help_hint, bar.fg(app.theme.grey2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
