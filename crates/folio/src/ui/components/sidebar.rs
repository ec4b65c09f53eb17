use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::domain::location::Location;
use crate::ui::Component;
use crate::ui::icon::Icon;

/// Location list with the active location highlighted.
pub struct Sidebar {
    selected: Location,
}

impl Sidebar {
    pub fn new(selected: Location) -> Self {
        Self { selected }
    }

    fn location_lines(&self) -> Vec<Line<'static>> {
        Location::ALL
            .iter()
            .map(|location| {
                let shortcut = location.index() + 1;
                if *location == self.selected {
                    return Line::from(Span::styled(
                        format!("{} {shortcut} {}", Icon::Pointer, location.label()),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ));
                }

                Line::from(Span::styled(
                    format!("  {shortcut} {}", location.label()),
                    Style::default().fg(Color::Gray),
                ))
            })
            .collect()
    }
}

impl Component for Sidebar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let sidebar = Paragraph::new(self.location_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Places ", Style::default().fg(Color::Cyan))),
        );

        f.render_widget(sidebar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_lines_marks_selected_location() {
        // Arrange
        let sidebar = Sidebar::new(Location::Desktop);

        // Act
        let lines = sidebar.location_lines();

        // Assert
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].content, "  1 Downloads");
        assert_eq!(lines[1].spans[0].content, "› 2 Desktop");
        assert_eq!(lines[2].spans[0].content, "  3 Documents");
    }
}
