//! ClipTools terminal shell.
//!
//! Wires the navigation core to the outside world: the system clipboard is
//! polled in the background, stdin lines are parsed as command token
//! sequences (the same tokens a delegated secondary launch would send), and
//! every refresh prints the current page to stdout. Both event sources feed
//! one channel, so a single thread owns the controller.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use tracing::{info, warn};

use cliptools::actions::{register_builtin_actions, ActionRegistry};
use cliptools::clipboard::{spawn_poller, NullClipboard, SystemClipboard};
use cliptools::collections::{CollectionTree, TextGroup};
use cliptools::commands::parse_sequence;
use cliptools::config;
use cliptools::controller::{ClipboardWriter, Controller, Frame, Shell};
use cliptools::data_loader;
use cliptools::error::ResultExt;
use cliptools::logging;

enum Event {
    /// A line of command tokens from stdin.
    Tokens(String),
    /// A newly observed external clipboard text.
    Clip(String),
    Eof,
}

/// Line-based stand-in for the GUI frame.
struct TermShell;

impl Shell for TermShell {
    fn refresh(&mut self, frame: &Frame) {
        println!("== {} ==", frame.title);
        for (row, line) in frame.lines.iter().enumerate() {
            let marker = if row == frame.focus { '>' } else { ' ' };
            println!("{marker}{}. {line}", row + 1);
        }
        println!("selected:  {}", frame.selected_text);
        println!("action:    {}", frame.action_help);
        println!("processed: {}", frame.processed_text);
        if frame.auto_process {
            println!("auto-process is ON");
        }
    }

    fn minimize(&mut self) {
        // nothing to minimize in a terminal
    }

    fn bring_to_front(&mut self) {}

    fn show_info(&mut self) {
        println!(
            "ClipTools {} - clipboard manager and text processing tools",
            env!("CARGO_PKG_VERSION")
        );
    }
}

fn main() -> anyhow::Result<()> {
    let user_folder = config::user_folder();
    std::fs::create_dir_all(&user_folder)
        .with_context(|| format!("cannot create user folder {}", user_folder.display()))?;
    let _guard = logging::init(&user_folder);

    let cfg = config::load_config(&user_folder);
    info!(?cfg, "starting cliptools");

    let mut registry = ActionRegistry::new();
    register_builtin_actions(&mut registry)?;
    let mut tree = CollectionTree::new(registry);
    for (name, texts) in data_loader::load_groups(&user_folder) {
        let group = TextGroup::with_items(name, cfg.number_of_rows, texts);
        let _ = tree.add_text_group(group).warn_on_err();
    }
    tree.apply_config(&cfg);

    let clipboard: Box<dyn ClipboardWriter> = match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(err) => {
            warn!(error = %err, "system clipboard unavailable, writes disabled");
            Box::new(NullClipboard)
        }
    };
    let mut controller = Controller::new(tree, cfg.string_length, clipboard, Box::new(TermShell));

    let (tx, rx) = mpsc::channel();
    {
        let tx = tx.clone();
        spawn_poller(move |text| tx.send(Event::Clip(text)).is_ok());
    }
    {
        let tx = tx.clone();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(Event::Tokens(line)).is_err() {
                            return;
                        }
                    }
                    Err(_) => break,
                }
            }
            let _ = tx.send(Event::Eof);
        });
    }
    drop(tx);

    controller.redraw();
    for event in rx {
        match event {
            Event::Tokens(line) => {
                controller.enqueue(parse_sequence(&line));
                controller.drain_queue();
            }
            Event::Clip(text) => controller.on_clipboard(&text),
            Event::Eof => break,
        }
    }

    info!("cliptools shutting down");
    Ok(())
}
