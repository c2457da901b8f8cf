//! Task view screen: the items of one list, with an input that either adds
//! a new item or rewrites the highlighted one.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};
use todolists_core::{Item, ListDetail};

use crate::app::Focus;
use crate::input::Input;

pub struct TasksScreen {
    /// Identifier of the list this view shows; fixed for the screen's
    /// lifetime.
    pub list_id: String,
    pub list_name: String,
    pub detail: Option<ListDetail>,
    pub input: Input,
    pub selected: Option<usize>,
    pub focus: Focus,
    /// UUID of the item being rewritten, when the input is in edit mode.
    pub editing: Option<String>,
    /// The input clears when the in-flight submit lands, not at submit time.
    pub pending_clear: bool,
}

impl TasksScreen {
    pub fn new(list_id: String, list_name: String) -> Self {
        Self {
            list_id,
            list_name,
            detail: None,
            input: Input::default(),
            selected: None,
            focus: Focus::Input,
            editing: None,
            pending_clear: false,
        }
    }

    /// Adopt the server's detail wholesale, keeping the highlight on a
    /// valid row.
    pub fn set_detail(&mut self, detail: ListDetail) {
        self.list_name = detail.name.clone();
        let len = detail.items.items.len();
        self.selected = if len == 0 {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(len - 1))
        };
        self.detail = Some(detail);
    }

    pub fn items(&self) -> &[Item] {
        self.detail.as_ref().map(|d| d.items.items.as_slice()).unwrap_or_default()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.items().get(i))
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1).min(self.items().len().saturating_sub(1)));
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    pub fn status_line(&self) -> String {
        let help = "Tab switch · Enter add · e edit · d delete · Esc back";
        match &self.detail {
            Some(detail) => format!(
                "{}/{} items · {help}",
                detail.items.total, detail.items.max_total
            ),
            None => help.to_string(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [heading_area, input_area, items_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(self.list_name.as_str()).bold(), heading_area);

        let title = if self.editing.is_some() { "Edit item" } else { "New item" };
        let input = Paragraph::new(self.input.value()).block(Block::bordered().title(title));
        frame.render_widget(input, input_area);
        if self.focus == Focus::Input {
            frame.set_cursor_position((
                input_area.x + 1 + self.input.cursor() as u16,
                input_area.y + 1,
            ));
        }

        let rows: Vec<ListItem> = self
            .items()
            .iter()
            .map(|item| ListItem::new(item.text.clone()))
            .collect();
        let list = List::new(rows)
            .block(Block::bordered().title("Items"))
            .highlight_symbol("> ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        let mut state = ListState::default();
        state.select(self.selected);
        frame.render_stateful_widget(list, items_area, &mut state);
    }
}
