/// Overlay listing application logs captured by the buffered logger
use crate::stores::app_logs_store::AppLogsState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct LogsPanel {
    pub logs: Vec<String>,
    pub scroll_offset: usize,
}

impl LogsPanel {
    pub fn from_state(app_logs_state: &AppLogsState) -> Self {
        Self {
            logs: app_logs_state.logs.clone(),
            scroll_offset: app_logs_state.scroll_offset,
        }
    }

    /// Range of log lines visible in a panel of `inner_height` rows,
    /// counting back from the newest line
    pub fn visible_range(&self, inner_height: usize) -> (usize, usize) {
        let total = self.logs.len();
        let end = total.saturating_sub(self.scroll_offset).max(inner_height.min(total));
        let start = end.saturating_sub(inner_height);
        (start, end)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let border = Style::default().fg(Color::Cyan);

        if self.logs.is_empty() {
            Paragraph::new("No logs yet...")
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Application Logs ")
                        .border_style(border),
                )
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let (start, end) = self.visible_range(inner_height);
        let visible: Vec<Line> = self.logs[start..end]
            .iter()
            .map(|log| Line::from(log.clone()))
            .collect();

        let title = if self.logs.len() > inner_height {
            format!(" Application Logs [{}/{}] ", end, self.logs.len())
        } else {
            " Application Logs ".to_string()
        };

        Paragraph::new(visible)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border),
            )
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
