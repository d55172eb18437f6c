//! Notification widget
//!
//! A modal message box for results and errors. Stays on screen until the
//! user dismisses it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Get the default title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A message shown in a modal box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Type of notification
    pub notification_type: NotificationType,
    /// Box title
    pub title: String,
    /// The message, possibly several lines
    pub message: String,
}

impl Notification {
    /// Create a new notification with the type's default title
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            notification_type,
            title: notification_type.title().to_string(),
            message: message.into(),
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Replace the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Height needed to show the whole message plus border and hint
    pub fn height(&self) -> u16 {
        self.message.lines().count() as u16 + 4
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notification.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let mut lines: Vec<Line> = self
            .notification
            .message
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" OK"),
        ]));

        Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("Test message");
        assert_eq!(n.message, "Test message");
        assert_eq!(n.notification_type, NotificationType::Info);
        assert_eq!(n.title, "Info");
    }

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Info.color(), Color::Blue);
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Warning.color(), Color::Yellow);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_custom_title_and_height() {
        let n = Notification::info("line one\nline two").with_title("Summary");
        assert_eq!(n.title, "Summary");
        assert_eq!(n.height(), 6);
    }
}
