//! The two-level registry of everything browsable.
//!
//! A [`CollectionTree`] owns two named lists-of-lists: the text groups and the
//! action groups. The distinguished `clips` text group is the clipboard
//! history, the only list that grows at runtime; it is seeded with a single
//! empty string so "no text selected yet" renders as a visible, selectable
//! empty row rather than absent data.

use crate::actions::{ActionGroup, ActionRegistry};
use crate::config::Config;
use crate::error::DataError;
use crate::windowed::{WindowedList, DEFAULT_PAGE_SIZE};

/// A named group of candidate source strings.
pub type TextGroup = WindowedList<String>;

/// Name of the clipboard-history group.
pub const CLIPS_GROUP: &str = "clips";

/// Absolute index of the clips group within the text groups; it is created
/// first and never removed.
pub const CLIPS_INDEX: usize = 0;

#[derive(Debug)]
pub struct CollectionTree {
    texts: WindowedList<TextGroup>,
    actions: ActionRegistry,
}

impl CollectionTree {
    pub fn new(mut actions: ActionRegistry) -> Self {
        actions.ensure_default();
        let mut texts = WindowedList::new("text groups", DEFAULT_PAGE_SIZE);
        texts.push_back(TextGroup::with_items(
            CLIPS_GROUP,
            DEFAULT_PAGE_SIZE,
            vec![String::new()],
        ));
        CollectionTree { texts, actions }
    }

    /// Add a named text group. Names are unique within the tree level.
    pub fn add_text_group(&mut self, group: TextGroup) -> Result<(), DataError> {
        if self.texts.child_by_name(group.name()).is_ok() {
            return Err(DataError::DuplicateName {
                group: self.texts.name().to_string(),
                name: group.name().to_string(),
            });
        }
        self.texts.push_back(group);
        Ok(())
    }

    pub fn texts(&self) -> &WindowedList<TextGroup> {
        &self.texts
    }

    pub fn texts_mut(&mut self) -> &mut WindowedList<TextGroup> {
        &mut self.texts
    }

    pub fn action_groups(&self) -> &WindowedList<ActionGroup> {
        self.actions.groups()
    }

    pub fn action_groups_mut(&mut self) -> &mut WindowedList<ActionGroup> {
        self.actions.groups_mut()
    }

    pub fn clips(&self) -> &TextGroup {
        self.texts
            .item(CLIPS_INDEX)
            .expect("clips group is created at construction")
    }

    pub fn clips_mut(&mut self) -> &mut TextGroup {
        self.texts
            .item_mut(CLIPS_INDEX)
            .expect("clips group is created at construction")
    }

    /// Diagnostic lookup of a text group by name.
    pub fn text_group_by_name(&self, name: &str) -> Result<&TextGroup, DataError> {
        self.texts.child_by_name(name)
    }

    /// Push the configured page size to every list and the history capacity
    /// to the clips group, the one long-lived growing instance.
    pub fn apply_config(&mut self, config: &Config) {
        let rows = config.number_of_rows;
        self.texts.set_page_size(rows);
        for group in self.texts.iter_mut() {
            group.set_page_size(rows);
        }
        self.actions.groups_mut().set_page_size(rows);
        for group in self.actions.groups_mut().iter_mut() {
            group.set_page_size(rows);
        }
        self.clips_mut().set_capacity(config.max_number_of_data);
    }
}
