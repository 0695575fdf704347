use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};
use crossterm::event::KeyCode;

pub enum MenuResult {
    Pending,
    Picked(usize),
    Cancelled,
}

/// Vertical pick list drawn as a popup over the game
pub struct Menu {
    title: String,
    items: Vec<String>,
    selected_index: usize,
}

impl Menu {
    pub fn new(title: impl Into<String>, items: Vec<String>, selected_index: usize) -> Self {
        let selected_index = selected_index.min(items.len().saturating_sub(1));
        Self {
            title: title.into(),
            items,
            selected_index,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected_index
    }

    pub fn handle_key(&mut self, code: KeyCode) -> MenuResult {
        match code {
            KeyCode::Up => self.selected_index = self.selected_index.saturating_sub(1),
            KeyCode::Down => {
                self.selected_index = (self.selected_index + 1).min(self.items.len().saturating_sub(1))
            }
            KeyCode::Enter if !self.items.is_empty() => return MenuResult::Picked(self.selected_index),
            KeyCode::Esc => return MenuResult::Cancelled,
            _ => {}
        }
        MenuResult::Pending
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == self.selected_index {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" » {}", item)).style(style)
            })
            .collect();

        f.render_widget(Clear, area);
        f.render_widget(
            List::new(items).block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .title_bottom(" [↑/↓] Move  [Enter] Pick  [Esc] Cancel ")
                    .borders(Borders::ALL),
            ),
            area,
        );
    }
}
