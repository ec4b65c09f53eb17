pub mod components;
pub mod format;
pub mod icon;

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::TableState;

use crate::app::ListingState;
use crate::domain::location::Location;

/// Width of the location sidebar, borders included.
const SIDEBAR_WIDTH: u16 = 20;

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

pub struct RenderContext<'a> {
    pub current_path: Option<&'a Path>,
    pub listing: &'a ListingState,
    pub location: Location,
    pub table_state: &'a mut TableState,
}

pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let RenderContext {
        current_path,
        listing,
        location,
        table_state,
    } = context;

    let area = f.area();

    // Three-section layout: top status bar, content area, footer bar
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Top status bar
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(location).render(f, status_bar_area);
    components::footer_bar::FooterBar::new(current_path.map(Path::to_path_buf))
        .render(f, footer_bar_area);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(content_area);

    components::sidebar::Sidebar::new(location).render(f, content_chunks[0]);
    components::listing::ListingPanel::new(listing, location, table_state)
        .render(f, content_chunks[1]);
}
