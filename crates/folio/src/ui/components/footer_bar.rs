use std::path::{Path, PathBuf};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::format::MISSING_VALUE;

const KEY_HINTS: &str = "j/k: move  tab/1-3: place  r: refresh  q: quit ";

pub struct FooterBar {
    current_path: Option<PathBuf>,
}

impl FooterBar {
    pub fn new(current_path: Option<PathBuf>) -> Self {
        Self { current_path }
    }

    /// Returns the current path with the home directory shortened to `~`.
    fn display_path(&self) -> String {
        let Some(current_path) = &self.current_path else {
            return MISSING_VALUE.to_string();
        };

        if let Some(home) = dirs::home_dir()
            && let Ok(relative) = current_path.strip_prefix(&home)
        {
            return Path::new("~").join(relative).display().to_string();
        }

        current_path.display().to_string()
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let left_text = format!(" Path: {}", self.display_path());
        let left_width = left_text.chars().count();
        let mut spans = vec![Span::styled(
            left_text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        )];

        let hints_width = KEY_HINTS.len();
        let total_width = area.width as usize;
        if left_width + hints_width + 1 < total_width {
            let padding_width = total_width - left_width - hints_width;

            spans.push(Span::raw(" ".repeat(padding_width)));
            spans.push(Span::styled(KEY_HINTS, Style::default().fg(Color::Gray)));
        }

        let footer = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}
