//! The navigation controller.
//!
//! Walks the four navigation states TEXTS -> TEXT -> ACTIONS -> ACTION,
//! wiring user commands to whichever list is currently browsed and producing
//! the text that ultimately goes to the clipboard. The controller owns all
//! navigation state and must be driven from a single thread; UI events and
//! delegated command batches funnel through the same entry points, with
//! queued batches drained FIFO before anything else runs.
//!
//! The current list is never stored as a pointer. It is resolved on demand
//! from the state plus the absolute index of the selected group, so a growing
//! clip history can never leave the controller with a dangling reference.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::actions::{safe_apply, ActionEntry, ActionGroup};
use crate::collections::{CollectionTree, TextGroup, CLIPS_INDEX};
use crate::commands::Command;
use crate::error::DataError;
use crate::windowed::Pageable;

/// The four navigation states: picking a text group, a text, an action group,
/// an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Texts,
    Text,
    Actions,
    Action,
}

/// One render-ready snapshot of everything the display shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: String,
    /// Exactly one label per visible row, empty strings past the data.
    pub lines: Vec<String>,
    /// The highlighted row.
    pub focus: usize,
    pub selected_text: String,
    pub action_help: String,
    pub processed_text: String,
    pub auto_process: bool,
}

/// Clipboard write collaborator. Best effort: failures are reported, never
/// fatal to the core.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Host window collaborator: display refresh and window gestures.
pub trait Shell {
    fn refresh(&mut self, frame: &Frame);
    fn minimize(&mut self);
    fn bring_to_front(&mut self);
    fn show_info(&mut self);
}

pub struct Controller {
    tree: CollectionTree,
    clipboard: Box<dyn ClipboardWriter>,
    shell: Box<dyn Shell>,
    queue: VecDeque<Command>,

    step: Step,
    /// Absolute index into the text groups list; starts at clips.
    selected_text_group: usize,
    /// Absolute index into the action groups list.
    selected_action_group: usize,
    selected_text: String,
    selected_action: ActionEntry,
    processed_text: String,
    /// Last text observed on the external clipboard.
    last_clip: String,
    /// Last text this controller itself wrote, so its own output is not
    /// re-ingested as new input.
    text_to_clipboard: String,
    auto_process: bool,
    display_len: usize,
}

impl Controller {
    pub fn new(
        tree: CollectionTree,
        display_len: usize,
        clipboard: Box<dyn ClipboardWriter>,
        shell: Box<dyn Shell>,
    ) -> Self {
        Controller {
            tree,
            clipboard,
            shell,
            queue: VecDeque::new(),
            step: Step::Texts,
            selected_text_group: CLIPS_INDEX,
            selected_action_group: 0,
            selected_text: String::new(),
            selected_action: ActionEntry::identity(),
            processed_text: String::new(),
            last_clip: String::new(),
            text_to_clipboard: String::new(),
            auto_process: false,
            display_len,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    pub fn processed_text(&self) -> &str {
        &self.processed_text
    }

    pub fn auto_process(&self) -> bool {
        self.auto_process
    }

    pub fn tree(&self) -> &CollectionTree {
        &self.tree
    }

    /// Handle one user command. Out-of-range selections are ignored; the
    /// display is refreshed afterwards either way.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::SelectRow(slot) => {
                if self.advance(slot).is_ok() {
                    self.sync_focus();
                } else {
                    debug!(slot, "selection outside the page, ignored");
                }
            }
            Command::Forward => {
                let slot = self.current().focus();
                if self.advance(slot).is_ok() {
                    self.sync_focus();
                }
            }
            Command::Back => {
                self.retreat();
                self.sync_focus();
            }
            Command::FocusUp => {
                self.current_mut().focus_up();
                self.sync_focus();
            }
            Command::FocusDown => {
                self.current_mut().focus_down();
                self.sync_focus();
            }
            Command::PageUp => {
                self.current_mut().page_up();
                self.sync_focus();
            }
            Command::PageDown => {
                self.current_mut().page_down();
                self.sync_focus();
            }
            Command::CopySelected => {
                let text = self.selected_text.clone();
                self.push_to_clipboard(text);
                self.step = Step::Text;
                self.shell.minimize();
            }
            Command::CopyProcessed => {
                let text = self.processed_text.clone();
                self.push_to_clipboard(text);
                self.step = Step::Text;
                self.shell.minimize();
            }
            Command::ToggleAutoProcess => {
                self.auto_process = !self.auto_process;
                info!(enabled = self.auto_process, "auto-process toggled");
            }
            Command::Minimize => self.shell.minimize(),
            Command::BringToFront => self.shell.bring_to_front(),
            Command::ShowInfo => self.shell.show_info(),
        }
        self.redraw();
    }

    /// Queue delegated commands for replay.
    pub fn enqueue(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.queue.extend(commands);
    }

    /// Replay all queued commands in order. A batch drains fully before
    /// control returns to the caller.
    pub fn drain_queue(&mut self) {
        while let Some(command) = self.queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// A new text was observed on the external clipboard.
    pub fn on_clipboard(&mut self, text: &str) {
        if text.is_empty() || text == self.last_clip || text == self.text_to_clipboard {
            return;
        }
        self.tree.clips_mut().push_front(text.to_string());
        self.last_clip = text.to_string();
        if self.auto_process {
            self.selected_text = text.to_string();
            self.reprocess();
            let processed = self.processed_text.clone();
            self.push_to_clipboard(processed);
        }
        if self.step == Step::Text && self.selected_text_group == CLIPS_INDEX {
            // clips are on screen right now
            if self.tree.clips().is_first_selected() {
                // the newest entry is highlighted and just changed under the
                // user, so track it
                self.selected_text = text.to_string();
                self.reprocess();
            }
            self.redraw();
        }
    }

    /// The user edited the selected text in place. Treated like a manual
    /// selection: recorded in the clip history and reprocessed, but nothing
    /// is written to the clipboard (editing is not committing).
    pub fn on_edited_text(&mut self, text: &str) {
        if text.is_empty() || text == self.selected_text {
            return;
        }
        self.tree.clips_mut().push_front(text.to_string());
        self.selected_text = text.to_string();
        self.reprocess();
        self.redraw();
    }

    /// Snapshot the current display state.
    pub fn frame(&self) -> Frame {
        let current = self.current();
        Frame {
            title: format!("Select from {}", current.name()),
            lines: current.page_names(&self.selected_text, self.display_len),
            focus: current.focus(),
            selected_text: self.selected_text.clone(),
            action_help: self.selected_action.help().to_string(),
            processed_text: self.processed_text.clone(),
            auto_process: self.auto_process,
        }
    }

    /// Push the current frame to the display collaborator.
    pub fn redraw(&mut self) {
        let frame = self.frame();
        self.shell.refresh(&frame);
    }

    /// Select the item at a visible slot and step to the next state. Fails
    /// with `OutOfRange` when the slot holds no data, which callers treat as
    /// a no-op.
    fn advance(&mut self, slot: usize) -> Result<(), DataError> {
        match self.step {
            Step::Texts => {
                let index = self.tree.texts().absolute(slot)?;
                self.tree.texts_mut().set_focus(slot);
                self.selected_text_group = index;
                self.step = Step::Text;
            }
            Step::Text => {
                let text = self.text_group().get(slot)?.clone();
                self.text_group_mut().set_focus(slot);
                self.selected_text = text;
                self.step = Step::Actions;
            }
            Step::Actions => {
                let index = self.tree.action_groups().absolute(slot)?;
                self.tree.action_groups_mut().set_focus(slot);
                self.selected_action_group = index;
                self.step = Step::Action;
            }
            Step::Action => {
                let entry = self.action_group().get(slot)?.clone();
                self.action_group_mut().set_focus(slot);
                self.selected_action = entry;
                // terminal selection: process, emit, and drop back to the
                // selected text group
                self.step = Step::Text;
                self.reprocess();
                let processed = self.processed_text.clone();
                self.push_to_clipboard(processed);
                self.shell.minimize();
            }
        }
        Ok(())
    }

    /// Step back one state. Cannot go further back than TEXTS.
    fn retreat(&mut self) {
        self.step = match self.step {
            Step::Action => Step::Actions,
            Step::Actions => Step::Text,
            Step::Text => Step::Texts,
            Step::Texts => Step::Texts,
        };
    }

    /// Pull the selected text or action from the newly focused row. Only the
    /// two leaf states carry a value; the group states select containers.
    fn sync_focus(&mut self) {
        match self.step {
            Step::Text => {
                if let Ok(text) = self.text_group().focused() {
                    self.selected_text = text.clone();
                }
            }
            Step::Action => {
                if let Ok(entry) = self.action_group().focused() {
                    self.selected_action = entry.clone();
                }
            }
            Step::Texts | Step::Actions => {}
        }
        self.reprocess();
    }

    fn reprocess(&mut self) {
        self.processed_text = safe_apply(&self.selected_action, &self.selected_text);
    }

    fn push_to_clipboard(&mut self, text: String) {
        if let Err(err) = self.clipboard.write(&text) {
            warn!(error = %err, "clipboard write failed");
        }
        self.text_to_clipboard = text;
    }

    fn current(&self) -> &dyn Pageable {
        match self.step {
            Step::Texts => self.tree.texts(),
            Step::Text => self.text_group(),
            Step::Actions => self.tree.action_groups(),
            Step::Action => self.action_group(),
        }
    }

    fn current_mut(&mut self) -> &mut dyn Pageable {
        match self.step {
            Step::Texts => self.tree.texts_mut(),
            Step::Text => self.text_group_mut(),
            Step::Actions => self.tree.action_groups_mut(),
            Step::Action => self.action_group_mut(),
        }
    }

    fn text_group(&self) -> &TextGroup {
        match self.tree.texts().item(self.selected_text_group) {
            Some(group) => group,
            None => self.tree.clips(),
        }
    }

    fn text_group_mut(&mut self) -> &mut TextGroup {
        let index = if self.tree.texts().item(self.selected_text_group).is_some() {
            self.selected_text_group
        } else {
            CLIPS_INDEX
        };
        self.tree
            .texts_mut()
            .item_mut(index)
            .expect("clips group is created at construction")
    }

    fn action_group(&self) -> &ActionGroup {
        self.tree
            .action_groups()
            .item(self.selected_action_group)
            .or_else(|| self.tree.action_groups().item(0))
            .expect("registry holds at least the default action group")
    }

    fn action_group_mut(&mut self) -> &mut ActionGroup {
        let index = if self
            .tree
            .action_groups()
            .item(self.selected_action_group)
            .is_some()
        {
            self.selected_action_group
        } else {
            0
        };
        self.tree
            .action_groups_mut()
            .item_mut(index)
            .expect("registry holds at least the default action group")
    }
}
