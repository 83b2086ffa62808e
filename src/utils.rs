//! Shared utility functions for ClipTools

/// Flatten and truncate a text for single-line display.
///
/// Embedded newlines collapse to spaces so a multi-line clip still renders as
/// one list row. Texts longer than `length` characters are cut and marked:
///
/// ```
/// use cliptools::utils::limit_text;
///
/// assert_eq!(limit_text("Short\ntext", 10), "Short text");
/// assert_eq!(limit_text("Long\nand\nboring\ntext", 10), "Long [...]");
/// ```
pub fn limit_text(text: &str, length: usize) -> String {
    let text = text.trim().replace('\n', " ");
    if text.chars().count() <= length {
        return text;
    }
    let keep = length.saturating_sub(5);
    let head: String = text.chars().take(keep).collect();
    format!("{head}[...]")
}
