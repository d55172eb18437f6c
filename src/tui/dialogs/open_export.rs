//! Post-export dialog
//!
//! Lists the files an export just wrote and offers to open the spreadsheet.

use std::path::Path;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::export::{CSV_FILE_NAME, XLSX_FILE_NAME};
use crate::tui::layout::centered_rect_fixed;

/// Lines describing where the reports went
pub fn summary_lines(spreadsheet: &Path) -> Vec<String> {
    let dir = spreadsheet.parent().unwrap_or(spreadsheet);
    vec![
        format!("Saved {} and {} to", CSV_FILE_NAME, XLSX_FILE_NAME),
        dir.display().to_string(),
    ]
}

/// Render the dialog for a spreadsheet written to `spreadsheet`
pub fn render(frame: &mut Frame, spreadsheet: &Path) {
    let text = summary_lines(spreadsheet);
    let width = text
        .iter()
        .map(|l| l.chars().count() as u16 + 4)
        .max()
        .unwrap_or(0)
        .clamp(44, 90);
    let area = centered_rect_fixed(width, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Export Complete ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let mut lines: Vec<Line> = text.into_iter().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from("Open the spreadsheet now?"));
    lines.push(Line::from(vec![
        Span::styled("[Y/Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Open   "),
        Span::styled("[N/Esc]", Style::default().fg(Color::DarkGray)),
        Span::raw(" Not now"),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines_name_both_reports() {
        let lines = summary_lines(Path::new("data/exports/report.xlsx"));
        assert_eq!(lines[0], "Saved report.csv and report.xlsx to");
        assert_eq!(lines[1], Path::new("data/exports").display().to_string());
    }
}
