//! Root coordinator: owns the screen state machine and turns key events and
//! API outcomes into state changes plus outgoing commands.
//!
//! # Design
//! `update` is pure with respect to I/O — it returns `Command` values and
//! the caller (main loop) executes them via `net::dispatch`. Every dispatch
//! bumps the epoch counter and every response carries the epoch it was
//! dispatched under; a response whose epoch is no longer current is
//! discarded. Leaving a screen always dispatches a fetch for the next one,
//! so responses addressed to a dead screen can never be applied.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
    Frame,
};
use todolists_core::{ApiError, ListDetail, ListSummary};

use crate::lists::ListsScreen;
use crate::tasks::TasksScreen;

/// Which widget on the active screen receives editing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Roster,
}

/// Everything the UI loop reacts to.
#[derive(Debug)]
pub enum Msg {
    Key(KeyEvent),
    Resize,
    /// Result of an API call, stamped with the epoch it was dispatched under.
    Api(u64, ApiOutcome),
}

#[derive(Debug)]
pub enum ApiOutcome {
    Lists(Result<Vec<ListSummary>, ApiError>),
    Created(Result<ListSummary, ApiError>),
    Detail(Result<ListDetail, ApiError>),
}

/// An API call the coordinator wants executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    AllLists,
    CreateList { name: String },
    DeleteList { list_id: String },
    GetList { list_id: String },
    AddItem { list_id: String, text: String },
    EditItem { list_id: String, item_id: String, text: String },
    DeleteItem { list_id: String, item_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub epoch: u64,
    pub call: ApiCall,
}

pub enum Screen {
    Lists(ListsScreen),
    Tasks(TasksScreen),
}

pub struct App {
    epoch: u64,
    pub screen: Screen,
    pub error: Option<String>,
    quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            epoch: 0,
            screen: Screen::Lists(ListsScreen::new()),
            error: None,
            quit: false,
        }
    }

    /// Commands to execute when the application starts.
    pub fn init(&mut self) -> Vec<Command> {
        vec![self.dispatch(ApiCall::AllLists)]
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn dispatch(&mut self, call: ApiCall) -> Command {
        self.epoch += 1;
        Command {
            epoch: self.epoch,
            call,
        }
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Command> {
        match msg {
            Msg::Resize => Vec::new(),
            Msg::Key(key) => self.on_key(key),
            Msg::Api(epoch, outcome) => {
                if epoch != self.epoch {
                    tracing::debug!(epoch, current = self.epoch, "discarding stale response");
                    return Vec::new();
                }
                self.on_outcome(outcome)
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Vec<Command> {
        // Any keypress dismisses the error banner; the key still applies.
        self.error = None;
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Vec::new();
        }
        match &self.screen {
            Screen::Lists(_) => self.on_lists_key(key),
            Screen::Tasks(_) => self.on_tasks_key(key),
        }
    }

    fn on_lists_key(&mut self, key: KeyEvent) -> Vec<Command> {
        let Screen::Lists(screen) = &mut self.screen else {
            return Vec::new();
        };
        match (screen.focus, key.code) {
            (_, KeyCode::Tab) => {
                screen.focus = match screen.focus {
                    Focus::Input => Focus::Roster,
                    Focus::Roster => Focus::Input,
                };
                Vec::new()
            }
            (Focus::Input, KeyCode::Enter) => {
                if screen.input.is_empty() {
                    return Vec::new();
                }
                // The input clears only once the create succeeds.
                let name = screen.input.value().to_string();
                vec![self.dispatch(ApiCall::CreateList { name })]
            }
            (Focus::Input, KeyCode::Esc) => {
                screen.focus = Focus::Roster;
                Vec::new()
            }
            (Focus::Input, _) => {
                screen.input.handle_key(key);
                Vec::new()
            }
            (Focus::Roster, KeyCode::Up | KeyCode::Char('k')) => {
                screen.select_prev();
                Vec::new()
            }
            (Focus::Roster, KeyCode::Down | KeyCode::Char('j')) => {
                screen.select_next();
                Vec::new()
            }
            (Focus::Roster, KeyCode::Enter) => {
                let Some(list) = screen.selected_list() else {
                    return Vec::new();
                };
                let (list_id, list_name) = (list.uuid.clone(), list.name.clone());
                self.open_list(list_id, list_name)
            }
            (Focus::Roster, KeyCode::Char('d') | KeyCode::Delete) => {
                let Some(list) = screen.selected_list() else {
                    return Vec::new();
                };
                let list_id = list.uuid.clone();
                vec![self.dispatch(ApiCall::DeleteList { list_id })]
            }
            (Focus::Roster, KeyCode::Esc | KeyCode::Char('q')) => {
                self.quit = true;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn on_tasks_key(&mut self, key: KeyEvent) -> Vec<Command> {
        let Screen::Tasks(screen) = &mut self.screen else {
            return Vec::new();
        };
        match (screen.focus, key.code) {
            (_, KeyCode::Tab) => {
                screen.focus = match screen.focus {
                    Focus::Input => Focus::Roster,
                    Focus::Roster => Focus::Input,
                };
                Vec::new()
            }
            (Focus::Input, KeyCode::Enter) => {
                if screen.input.is_empty() {
                    return Vec::new();
                }
                let text = screen.input.value().to_string();
                let list_id = screen.list_id.clone();
                let call = match screen.editing.clone() {
                    Some(item_id) => ApiCall::EditItem {
                        list_id,
                        item_id,
                        text,
                    },
                    None => ApiCall::AddItem { list_id, text },
                };
                screen.pending_clear = true;
                vec![self.dispatch(call)]
            }
            (Focus::Input, KeyCode::Esc) => {
                if screen.editing.is_some() {
                    screen.editing = None;
                    screen.input.clear();
                } else {
                    screen.focus = Focus::Roster;
                }
                Vec::new()
            }
            (Focus::Input, _) => {
                screen.input.handle_key(key);
                Vec::new()
            }
            (Focus::Roster, KeyCode::Up | KeyCode::Char('k')) => {
                screen.select_prev();
                Vec::new()
            }
            (Focus::Roster, KeyCode::Down | KeyCode::Char('j')) => {
                screen.select_next();
                Vec::new()
            }
            (Focus::Roster, KeyCode::Char('d') | KeyCode::Delete) => {
                let Some(item) = screen.selected_item() else {
                    return Vec::new();
                };
                let call = ApiCall::DeleteItem {
                    list_id: screen.list_id.clone(),
                    item_id: item.uuid.clone(),
                };
                screen.pending_clear = false;
                vec![self.dispatch(call)]
            }
            (Focus::Roster, KeyCode::Char('e')) => {
                let Some(item) = screen.selected_item() else {
                    return Vec::new();
                };
                let (item_id, text) = (item.uuid.clone(), item.text.clone());
                screen.editing = Some(item_id);
                screen.input.set(text);
                screen.focus = Focus::Input;
                Vec::new()
            }
            (Focus::Roster, KeyCode::Esc) => self.back_to_lists(),
            _ => Vec::new(),
        }
    }

    fn on_outcome(&mut self, outcome: ApiOutcome) -> Vec<Command> {
        match outcome {
            ApiOutcome::Lists(Ok(lists)) => {
                if let Screen::Lists(screen) = &mut self.screen {
                    screen.set_lists(lists);
                }
                Vec::new()
            }
            ApiOutcome::Created(Ok(created)) => {
                // The pending input clears only now that the create resolved.
                if let Screen::Lists(screen) = &mut self.screen {
                    screen.input.clear();
                }
                self.open_list(created.uuid, created.name)
            }
            ApiOutcome::Detail(Ok(detail)) => {
                if let Screen::Tasks(screen) = &mut self.screen {
                    if screen.pending_clear {
                        screen.input.clear();
                        screen.editing = None;
                        screen.pending_clear = false;
                    }
                    screen.set_detail(detail);
                }
                Vec::new()
            }
            ApiOutcome::Lists(Err(e))
            | ApiOutcome::Created(Err(e))
            | ApiOutcome::Detail(Err(e)) => {
                if let Screen::Tasks(screen) = &mut self.screen {
                    screen.pending_clear = false;
                }
                tracing::warn!(error = %e, "request failed");
                self.error = Some(e.to_string());
                Vec::new()
            }
        }
    }

    fn open_list(&mut self, list_id: String, list_name: String) -> Vec<Command> {
        tracing::info!(%list_id, "opening list");
        let command = self.dispatch(ApiCall::GetList {
            list_id: list_id.clone(),
        });
        self.screen = Screen::Tasks(TasksScreen::new(list_id, list_name));
        vec![command]
    }

    fn back_to_lists(&mut self) -> Vec<Command> {
        tracing::info!("returning to list selector");
        let command = self.dispatch(ApiCall::AllLists);
        self.screen = Screen::Lists(ListsScreen::new());
        vec![command]
    }

    pub fn render(&self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        match &self.screen {
            Screen::Lists(screen) => screen.render(frame, main),
            Screen::Tasks(screen) => screen.render(frame, main),
        }

        let line = match &self.error {
            Some(error) => Line::from(format!("error: {error}")).red(),
            None => {
                let help = match &self.screen {
                    Screen::Lists(screen) => screen.status_line(),
                    Screen::Tasks(screen) => screen.status_line(),
                };
                Line::from(help).dark_gray()
            }
        };
        frame.render_widget(Paragraph::new(line), status);
    }
}
