//! Terminal front-end for the list-of-lists todo service.

mod app;
mod input;
mod lists;
mod net;
mod tasks;

use std::io::stdout;

use anyhow::Context;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};
use todolists_core::ListClient;
use tracing_subscriber::EnvFilter;

use crate::app::{App, Msg};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let base_url =
        std::env::var("TODOLISTS_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(&base_url))
}

/// Log to a file when `TODOLISTS_LOG` names one; stderr belongs to the
/// terminal UI, so without it logging stays off.
fn init_logging() -> anyhow::Result<()> {
    let Ok(path) = std::env::var("TODOLISTS_LOG") else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run(base_url: &str) -> anyhow::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, base_url).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    base_url: &str,
) -> anyhow::Result<()> {
    let client = ListClient::new(base_url);
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_key_reader(tx.clone());

    let mut app = App::new();
    for command in app.init() {
        net::dispatch(&tx, &client, command);
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;
        let Some(msg) = rx.recv().await else {
            break;
        };
        for command in app.update(msg) {
            net::dispatch(&tx, &client, command);
        }
        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

/// Forward terminal input into the message channel from a dedicated thread;
/// `crossterm::event::read` blocks, so it cannot live on the async loop.
fn spawn_key_reader(tx: UnboundedSender<Msg>) {
    std::thread::spawn(move || loop {
        match crossterm::event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if tx.send(Msg::Key(key)).is_err() {
                    break;
                }
            }
            Ok(Event::Resize(_, _)) => {
                if tx.send(Msg::Resize).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}
