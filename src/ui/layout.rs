use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the confirm button column.
pub const CONFIRM_WIDTH: u16 = 14;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub confirm: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(CONFIRM_WIDTH)])
        .split(rows[1]);

    Regions {
        header: rows[0],
        input: input_row[0],
        confirm: input_row[1],
        body: rows[2],
        footer: rows[3],
    }
}

/// Center a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
