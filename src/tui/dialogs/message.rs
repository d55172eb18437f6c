//! Message dialog
//!
//! Shows a notification in a centered box until dismissed

use ratatui::Frame;

use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Notification, NotificationWidget};

/// Render a notification as a modal box
pub fn render(frame: &mut Frame, notification: &Notification) {
    let width = notification
        .message
        .lines()
        .map(|l| l.chars().count() as u16 + 4)
        .max()
        .unwrap_or(0)
        .clamp(30, 80);
    let area = centered_rect_fixed(width, notification.height(), frame.area());

    frame.render_widget(NotificationWidget::new(notification), area);
}
