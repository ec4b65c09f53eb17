use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use crate::app::ListingState;
use crate::domain::access_error::AccessError;
use crate::domain::entry::Entry;
use crate::domain::location::Location;
use crate::ui::Page;
use crate::ui::format::{format_modified, format_size};
use crate::ui::icon::Icon;

const EMPTY_FOLDER_MESSAGE: &str = "This folder is empty.";
const SIZE_COLUMN_WIDTH: u16 = 10;
const MODIFIED_COLUMN_WIDTH: u16 = 16;

/// Main panel showing exactly one of: loading, entries, or an error.
pub struct ListingPanel<'a> {
    listing: &'a ListingState,
    location: Location,
    table_state: &'a mut TableState,
}

impl<'a> ListingPanel<'a> {
    pub fn new(
        listing: &'a ListingState,
        location: Location,
        table_state: &'a mut TableState,
    ) -> Self {
        Self {
            listing,
            location,
            table_state,
        }
    }

    fn block(&self) -> Block<'static> {
        Block::default().borders(Borders::ALL).title(Span::styled(
            format!(" {} ", self.location.label()),
            Style::default().fg(Color::Cyan),
        ))
    }

    fn render_message(&self, f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
        let paragraph = Paragraph::new(lines)
            .block(self.block())
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }

    fn render_entries(&mut self, f: &mut Frame, area: Rect, entries: &[Entry]) {
        let header = Row::new(["Name", "Size", "Modified"].map(Cell::from))
            .style(Style::default().bg(Color::Gray).fg(Color::Black))
            .height(1);
        let rows = entries.iter().map(entry_row);
        let table = Table::new(
            rows,
            [
                Constraint::Min(10),
                Constraint::Length(SIZE_COLUMN_WIDTH),
                Constraint::Length(MODIFIED_COLUMN_WIDTH),
            ],
        )
        .header(header)
        .block(self.block())
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}

impl Page for ListingPanel<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let listing = self.listing;
        match listing {
            ListingState::Loading => {
                let lines = loading_lines(self.location);
                self.render_message(f, area, lines);
            }
            ListingState::Loaded(entries) if entries.is_empty() => {
                let lines = vec![Line::from(Span::styled(
                    EMPTY_FOLDER_MESSAGE,
                    Style::default().fg(Color::DarkGray),
                ))];
                self.render_message(f, area, lines);
            }
            ListingState::Loaded(entries) => {
                self.render_entries(f, area, entries);
            }
            ListingState::Failed(error) => {
                let lines = error_lines(error);
                self.render_message(f, area, lines);
            }
        }
    }
}

fn loading_lines(location: Location) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        format!("{} Loading {}...", Icon::current_spinner(), location.label()),
        Style::default().fg(Color::Yellow),
    ))]
}

fn error_lines(error: &AccessError) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", Icon::Warn, error.title()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(
        error
            .to_string()
            .lines()
            .map(|line| Line::from(line.to_string())),
    );

    lines
}

fn entry_row(entry: &Entry) -> Row<'static> {
    let name_cell = if entry.is_dir {
        Cell::from(format!("{} {}/", Icon::Folder, entry.name)).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Cell::from(format!("{} {}", Icon::File, entry.name))
    };

    Row::new(vec![
        name_cell,
        Cell::from(format_size(entry.size_bytes)),
        Cell::from(format_modified(entry.modified_at)),
    ])
    .height(1)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_text(listing: &ListingState, table_state: &mut TableState) -> String {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");

        terminal
            .draw(|f| {
                let area = f.area();
                ListingPanel::new(listing, Location::Downloads, table_state).render(f, area);
            })
            .expect("failed to draw");

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_render_loading_state() {
        // Arrange
        let listing = ListingState::Loading;
        let mut table_state = TableState::default();

        // Act
        let text = render_text(&listing, &mut table_state);

        // Assert
        assert!(text.contains("Loading Downloads..."));
    }

    #[test]
    fn test_render_empty_folder() {
        // Arrange
        let listing = ListingState::Loaded(Vec::new());
        let mut table_state = TableState::default();

        // Act
        let text = render_text(&listing, &mut table_state);

        // Assert
        assert!(text.contains(EMPTY_FOLDER_MESSAGE));
    }

    #[test]
    fn test_render_entries_table() {
        // Arrange
        let listing = ListingState::Loaded(vec![
            Entry::directory("Archive", None),
            Entry::file("setup.dmg", 3 * 1024 * 1024, None),
        ]);
        let mut table_state = TableState::default();
        table_state.select(Some(1));

        // Act
        let text = render_text(&listing, &mut table_state);

        // Assert
        assert!(text.contains("Name"));
        assert!(text.contains("Modified"));
        assert!(text.contains("Archive/"));
        assert!(text.contains(">> · setup.dmg"));
        assert!(text.contains("3.0 MB"));
    }

    #[test]
    fn test_render_permission_denied_error() {
        // Arrange
        let listing = ListingState::Failed(AccessError::PermissionDenied {
            path: PathBuf::from("/home/me/Downloads"),
            label: "Downloads".to_string(),
        });
        let mut table_state = TableState::default();

        // Act
        let text = render_text(&listing, &mut table_state);

        // Assert
        assert!(text.contains("! Permission denied"));
        assert!(text.contains("/home/me/Downloads"));
    }

    #[test]
    fn test_error_lines_start_with_title() {
        // Arrange
        let error = AccessError::Corrupt {
            path: PathBuf::from("/mnt/usb"),
        };

        // Act
        let lines = error_lines(&error);

        // Assert
        assert_eq!(lines[0].spans[0].content, "! Unreadable folder");
        assert!(lines[2].spans[0].content.contains("may be corrupted"));
    }
}
