//! Text-transform actions and their registry.
//!
//! An action is a named `string -> string` function grouped under a category
//! ("case", "accents", ...). The registry is built explicitly at startup and
//! handed to the controller; registering the same name twice inside one
//! category is a programming error and fails with
//! [`DataError::DuplicateName`]. A misbehaving transform never takes the app
//! down: [`safe_apply`] converts any failure into an inline `ERROR: ...`
//! string.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::error::DataError;
use crate::sanitize;
use crate::utils::limit_text;
use crate::windowed::{Describe, WindowedList, DEFAULT_PAGE_SIZE};

/// The transform itself. Failures surface as error strings via [`safe_apply`],
/// they are never propagated to the navigation layer.
pub type TransformFn = Arc<dyn Fn(&str) -> anyhow::Result<String> + Send + Sync>;

/// A named text transform with a one-line help text.
#[derive(Clone)]
pub struct ActionEntry {
    name: String,
    help: String,
    transform: TransformFn,
}

impl ActionEntry {
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        transform: impl Fn(&str) -> anyhow::Result<String> + Send + Sync + 'static,
    ) -> Self {
        ActionEntry {
            name: name.into(),
            help: help.into(),
            transform: Arc::new(transform),
        }
    }

    /// The do-nothing action. Also the controller's default before any
    /// selection has been made.
    pub fn identity() -> Self {
        ActionEntry::new("paste", "Dummy function, return the same text", |text| {
            Ok(text.to_string())
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn apply(&self, text: &str) -> anyhow::Result<String> {
        (self.transform)(text)
    }
}

impl fmt::Debug for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionEntry")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Apply an action to a text, suppressing failures. The display layer always
/// gets a string back, worst case one starting with `ERROR: `.
pub fn safe_apply(entry: &ActionEntry, text: &str) -> String {
    match entry.apply(text) {
        Ok(result) => result,
        Err(err) => format!("ERROR: {err}"),
    }
}

/// Action rows show a live preview of the transform applied to the currently
/// selected text, prefixed with the action name.
impl Describe for ActionEntry {
    fn describe(&self, context: &str, limit: usize) -> String {
        let result = limit_text(&safe_apply(self, context), limit);
        format!("{}: {}", self.name, result)
    }
}

/// One category of actions.
pub type ActionGroup = WindowedList<ActionEntry>;

/// All registered actions, grouped by category. A thin specialization of
/// [`WindowedList`]: same paging mechanics, plus name-deduplicated
/// registration.
#[derive(Debug)]
pub struct ActionRegistry {
    groups: WindowedList<ActionGroup>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        ActionRegistry {
            groups: WindowedList::new("action groups", DEFAULT_PAGE_SIZE),
        }
    }

    /// Register an action under a category, creating the category group on
    /// demand. Fails with `DuplicateName` when the name already exists in the
    /// category; the earlier registration stays intact.
    pub fn register(&mut self, category: &str, entry: ActionEntry) -> Result<(), DataError> {
        if self.groups.child_by_name(category).is_err() {
            let page_size = self.groups.page_size();
            self.groups.push_back(ActionGroup::new(category, page_size));
        }
        let group = self.groups.child_by_name_mut(category)?;
        if group.iter().any(|existing| existing.name == entry.name) {
            return Err(DataError::DuplicateName {
                group: category.to_string(),
                name: entry.name,
            });
        }
        group.push_back(entry);
        Ok(())
    }

    /// Make sure an ACTION selection can always resolve, even on a registry
    /// nobody populated.
    pub fn ensure_default(&mut self) {
        if self.groups.is_empty() {
            let _ = self.register("paste", ActionEntry::identity());
        }
    }

    pub fn groups(&self) -> &WindowedList<ActionGroup> {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut WindowedList<ActionGroup> {
        &mut self.groups
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Keyboard-layout repair tables. I use Hungarian 101 key and US keyboards in
// parallel; typing on the wrong layout turns accents into this garbage and
// back. ű and í are left out as they are ambiguous.
const HUN_CHARS: &str = "éÉáÁűŰőŐúÚöÖüÜóÓíÍ'\"+!%/=()";
const EN_CHARS: &str = ";:'\"\\|[{]}0)-_=+`~!@#$%^&*(";

fn translate(text: &str, from: &str, to: &str) -> String {
    text.chars()
        .map(|ch| match from.chars().position(|c| c == ch) {
            Some(index) => to.chars().nth(index).unwrap_or(ch),
            None => ch,
        })
        .collect()
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Register the builtin action set. Add new ones here as you like.
pub fn register_builtin_actions(registry: &mut ActionRegistry) -> Result<(), DataError> {
    registry.register("paste", ActionEntry::identity())?;

    registry.register(
        "case",
        ActionEntry::new("upper", "Text in UPPERCASE", |text| Ok(text.to_uppercase())),
    )?;
    registry.register(
        "case",
        ActionEntry::new("lower", "Text in lowercase", |text| Ok(text.to_lowercase())),
    )?;
    registry.register(
        "case",
        ActionEntry::new("title", "Text in Title Case", |text| Ok(title_case(text))),
    )?;

    registry.register(
        "accents",
        ActionEntry::new(
            "to_hun",
            "Correct accents if you forgot to change to the Hungarian keyboard",
            |text| Ok(translate(text, EN_CHARS, HUN_CHARS)),
        ),
    )?;
    registry.register(
        "accents",
        ActionEntry::new(
            "to_en",
            "Correct accents if you forgot to change to the English keyboard",
            |text| Ok(translate(text, HUN_CHARS, EN_CHARS)),
        ),
    )?;
    registry.register(
        "accents",
        ActionEntry::new("shave_marks", "Remove all diacritic marks", |text| {
            Ok(sanitize::shave_marks(text))
        }),
    )?;
    registry.register(
        "accents",
        ActionEntry::new("asciize", "Remove all unicode to be plain ascii", |text| {
            Ok(sanitize::asciize(text))
        }),
    )?;
    registry.register(
        "accents",
        ActionEntry::new(
            "dewinize",
            "Replace Win1252 symbols with ASCII chars or sequences",
            |text| Ok(sanitize::dewinize(text)),
        ),
    )?;

    registry.register(
        "filename",
        ActionEntry::new("linux", "Filenames with forward slashes", |text| {
            Ok(text.replace('\\', "/"))
        }),
    )?;
    registry.register(
        "filename",
        ActionEntry::new("win", "Filenames with backslashes", |text| {
            Ok(text.replace('/', "\\"))
        }),
    )?;
    registry.register(
        "filename",
        ActionEntry::new("double", "Filenames with double backslashes", |text| {
            Ok(text.replace('\\', "\\\\"))
        }),
    )?;
    registry.register(
        "filename",
        ActionEntry::new(
            "content",
            "Get the content of the file named by the text",
            |text| {
                let path = Path::new(text);
                if !path.is_file() {
                    return Ok("ERROR: not a file".to_string());
                }
                fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
            },
        ),
    )?;

    registry.register(
        "split",
        ActionEntry::new("semicolon", "Split lines by semicolon", |text| {
            Ok(text.replace("; ", "\n").replace(';', "\n"))
        }),
    )?;

    Ok(())
}
