//! Layout definitions for the TUI
//!
//! The window is a single screen: entry form on top, the button row, the
//! expense table and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Form fields (Date, Category, Amount, Note)
    pub form: Rect,
    /// Button row
    pub buttons: Rect,
    /// Expense table
    pub table: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Form: 4 fields + error line + border
                Constraint::Length(3), // Buttons
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            form: chunks[0],
            buttons: chunks[1],
            table: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::new(area);

        assert_eq!(layout.form.height, 7);
        assert_eq!(layout.buttons.height, 3);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.table.height, 24 - 7 - 3 - 1);
    }

    #[test]
    fn test_centered_rect_fixed_is_clamped() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(50, 7, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));

        let rect = centered_rect_fixed(10, 3, area);
        assert_eq!(rect, Rect::new(5, 1, 10, 3));
    }
}
