use crate::ui::repos::{Focus, Notice, NoticeKind};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const INPUT_HINTS: &str =
    " Enter: Confirm │ Ctrl+U: Clear │ Tab: List │ Ctrl+R: Refresh │ Esc: Quit";
const LIST_HINTS: &str =
    " ↑/↓: Move │ Enter/o: Open │ s: Share │ Tab: Username │ Ctrl+R: Refresh │ Esc: Quit";

pub struct Footer<'a> {
    focus: Focus,
    notice: Option<&'a Notice>,
}

impl<'a> Footer<'a> {
    pub fn new(focus: Focus, notice: Option<&'a Notice>) -> Self {
        Self { focus, notice }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match self.notice {
            Some(notice) => {
                let color = match notice.kind {
                    NoticeKind::Info => STATUS_OK,
                    NoticeKind::Error => STATUS_ERROR,
                };
                (format!(" {}", notice.text), Style::default().fg(color))
            }
            None => {
                let hints = match self.focus {
                    Focus::Input => INPUT_HINTS,
                    Focus::List => LIST_HINTS,
                };
                (hints.to_string(), dim)
            }
        };
        let version = format!("v{} ", VERSION);

        // Char count, not bytes.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
