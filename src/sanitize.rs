//! Unicode cleanup helpers for the accent-repair actions.
//!
//! Ports of the classic text sanitizing recipes from "Fluent Python" by
//! Luciano Ramalho (O'Reilly, 2015): diacritic shaving, Win1252 symbol
//! replacement, and full asciization. Useful mostly on Latin content.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove all diacritic marks: decompose, drop the combining marks, then
/// recompose what remains.
///
/// ```
/// use cliptools::sanitize::shave_marks;
///
/// assert_eq!(shave_marks("ÁRVÍZTŰRŐ TÜKÖRFÚRÓGÉP"), "ARVIZTURO TUKORFUROGEP");
/// assert_eq!(shave_marks("árvíztűrő tükörfúrógép"), "arvizturo tukorfurogep");
/// ```
pub fn shave_marks(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Replace Win1252 symbols with ASCII chars or sequences. Needed when
/// copying text from MS Office, like Word.
///
/// ```
/// use cliptools::sanitize::dewinize;
///
/// assert_eq!(
///     dewinize("“Stupid word • error inside™ ”"),
///     "\"Stupid word - error inside(TM) \"",
/// );
/// ```
pub fn dewinize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '‚' => out.push('\''),
            'ƒ' => out.push('f'),
            '„' => out.push('"'),
            '†' => out.push('*'),
            'ˆ' => out.push('^'),
            '‹' => out.push('<'),
            '›' => out.push('>'),
            '‘' | '’' => out.push('\''),
            '“' | '”' => out.push('"'),
            '•' | '–' | '—' => out.push('-'),
            '˜' => out.push('~'),
            '€' => out.push_str("<euro>"),
            '…' => out.push_str("..."),
            'Œ' => out.push_str("OE"),
            'œ' => out.push_str("oe"),
            '™' => out.push_str("(TM)"),
            '‰' => out.push_str("<per mille>"),
            '‡' => out.push_str("**"),
            other => out.push(other),
        }
    }
    out
}

/// Reduce the text to plain ASCII-friendly form: dewinize, shave the
/// diacritics, spell out the sharp s, and normalize for compatibility.
///
/// ```
/// use cliptools::sanitize::asciize;
///
/// assert_eq!(
///     asciize("“Öt szép szűzlány őrült írót nyúz”"),
///     "\"Ot szep szuzlany orult irot nyuz\"",
/// );
/// ```
pub fn asciize(text: &str) -> String {
    let no_marks = shave_marks(&dewinize(text)).replace('ß', "ss");
    no_marks.nfkc().collect()
}
