use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::repos::{Focus, ListView, RepoScreenState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let screen = app.screen();
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new(&screen.saved_user).widget(), regions.header);
    draw_input(frame, screen, regions.input);
    draw_confirm(frame, screen, regions.confirm);
    frame.render_widget(Clear, regions.body);
    draw_body(frame, screen, app.spinner_tick(), regions.body);
    frame.render_widget(
        Footer::new(screen.focus, screen.notice.as_ref()).widget(regions.footer),
        regions.footer,
    );
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}

fn draw_input(frame: &mut Frame<'_>, screen: &RepoScreenState, area: Rect) {
    let focused = screen.focus == Focus::Input;
    let content = if screen.input.is_empty() && !focused {
        Span::styled("GitHub username", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(screen.input.clone(), Style::default().fg(HEADER_TEXT))
    };
    let widget = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(" Username ")
            .borders(Borders::ALL)
            .border_style(border_style(focused)),
    );
    frame.render_widget(widget, area);

    if focused && area.width > 2 && area.height > 2 {
        let typed = screen.input.chars().count() as u16;
        let x = area.x + 1 + typed.min(area.width - 3);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_confirm(frame: &mut Frame<'_>, screen: &RepoScreenState, area: Rect) {
    let style = if screen.confirm.enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    let widget = Paragraph::new(Line::from(Span::styled(screen.confirm.label.text(), style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, area);
}

fn draw_body(frame: &mut Frame<'_>, screen: &RepoScreenState, spinner_tick: usize, area: Rect) {
    let block = Block::default()
        .title(" Repositories ")
        .borders(Borders::ALL)
        .border_style(border_style(screen.focus == Focus::List));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &screen.view {
        ListView::Idle => {}
        ListView::Loading => {
            let spinner = SPINNER_FRAMES[spinner_tick % SPINNER_FRAMES.len()];
            let line = Line::from(vec![
                Span::styled(spinner, Style::default().fg(ACCENT)),
                Span::styled(" Loading repositories…", Style::default().fg(MUTED_TEXT)),
            ]);
            let target = centered_rect_by_size(inner, 24, 1);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), target);
        }
        ListView::Loaded { repos, selected } => {
            let items: Vec<ListItem> = repos
                .iter()
                .map(|repo| {
                    ListItem::new(Line::from(vec![
                        Span::styled(repo.name.clone(), Style::default().fg(HEADER_TEXT)),
                        Span::styled("  ", Style::default()),
                        Span::styled(repo.html_url.clone(), Style::default().fg(MUTED_TEXT)),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut state = ListState::default().with_selected(Some(*selected));
            frame.render_stateful_widget(list, inner, &mut state);
        }
        view @ (ListView::Empty | ListView::Error(_)) => {
            let text = view.message().unwrap_or_default();
            let color = if matches!(view, ListView::Error(_)) {
                STATUS_ERROR
            } else {
                MUTED_TEXT
            };
            let width = text.chars().count() as u16;
            let target = centered_rect_by_size(inner, width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(text, Style::default().fg(color)))
                    .alignment(Alignment::Center),
                target,
            );
        }
    }
}
