//! Key and command-line command tokens.
//!
//! Every user gesture reaches the controller as one of these commands. The
//! single-character token table matches the key bindings: digits select a
//! visible row, letters drive navigation and copying. Delegated command
//! strings from a secondary launch ("f1c") are just token sequences replayed
//! in order.

/// A single user command with the navigation semantics the controller
/// implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the n-th visible row (0-based).
    SelectRow(usize),
    /// Go back to the previous navigation state.
    Back,
    /// Use the focused row and go to the next navigation state.
    Forward,
    FocusUp,
    FocusDown,
    PageUp,
    PageDown,
    /// Copy the selected text verbatim and minimize.
    CopySelected,
    /// Copy the processed text and minimize.
    CopyProcessed,
    ToggleAutoProcess,
    ShowInfo,
    Minimize,
    BringToFront,
}

/// Map one token character to a command. Unknown characters map to `None`
/// and are ignored.
pub fn parse_token(token: char) -> Option<Command> {
    let token = token.to_ascii_lowercase();
    match token {
        '1'..='9' => Some(Command::SelectRow(token.to_digit(10)? as usize - 1)),
        '0' => Some(Command::Minimize),
        'a' => Some(Command::Back),
        'd' => Some(Command::Forward),
        'w' => Some(Command::FocusUp),
        's' => Some(Command::FocusDown),
        'q' => Some(Command::PageUp),
        'e' => Some(Command::PageDown),
        'f' => Some(Command::BringToFront),
        'c' => Some(Command::CopySelected),
        'v' => Some(Command::CopyProcessed),
        'p' => Some(Command::ToggleAutoProcess),
        'i' => Some(Command::ShowInfo),
        _ => None,
    }
}

/// Parse a delegated command string like `"f1c"` into the ordered commands it
/// stands for, skipping anything unknown.
pub fn parse_sequence(tokens: &str) -> Vec<Command> {
    tokens.chars().filter_map(parse_token).collect()
}
