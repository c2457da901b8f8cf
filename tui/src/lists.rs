//! List selector screen: every list the service knows about, plus an input
//! for creating a new one.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};
use todolists_core::ListSummary;

use crate::app::Focus;
use crate::input::Input;

pub struct ListsScreen {
    pub input: Input,
    pub lists: Vec<ListSummary>,
    pub selected: Option<usize>,
    pub focus: Focus,
}

impl ListsScreen {
    pub fn new() -> Self {
        Self {
            input: Input::default(),
            lists: Vec::new(),
            selected: None,
            focus: Focus::Input,
        }
    }

    /// Adopt the server's collection wholesale, keeping the highlight on a
    /// valid row.
    pub fn set_lists(&mut self, lists: Vec<ListSummary>) {
        self.lists = lists;
        self.selected = if self.lists.is_empty() {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(self.lists.len() - 1))
        };
    }

    pub fn selected_list(&self) -> Option<&ListSummary> {
        self.selected.and_then(|i| self.lists.get(i))
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1).min(self.lists.len().saturating_sub(1)));
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    pub fn status_line(&self) -> String {
        "Tab switch · Enter create/open · d delete · q quit".to_string()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [input_area, roster_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

        let input = Paragraph::new(self.input.value()).block(Block::bordered().title("New list"));
        frame.render_widget(input, input_area);
        if self.focus == Focus::Input {
            frame.set_cursor_position((
                input_area.x + 1 + self.input.cursor() as u16,
                input_area.y + 1,
            ));
        }

        let rows: Vec<ListItem> = self
            .lists
            .iter()
            .map(|l| ListItem::new(format!("{}  {}", l.name, l.created.format("%Y-%m-%d"))))
            .collect();
        let roster = List::new(rows)
            .block(Block::bordered().title("Lists"))
            .highlight_symbol("> ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        let mut state = ListState::default();
        state.select(self.selected);
        frame.render_stateful_widget(roster, roster_area, &mut state);
    }
}
