//! Bounded, windowed content lists.
//!
//! A [`WindowedList`] is an ordered collection of which only a `page_size`
//! slice (the page, starting at `location`) is visible and addressable at a
//! time. One row within the page carries the `focus`. All navigation in the
//! app, browsing text groups, clips and actions alike, runs on this single
//! concrete type; per-kind display behavior comes from the [`Describe`] trait
//! instead of inheritance.

use crate::error::DataError;
use crate::utils::limit_text;

/// Default rows per page when no configuration has been applied yet.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Per-item display behavior.
///
/// `context` carries the currently selected text so action entries can show a
/// live preview; plain texts ignore it. `limit` bounds the label length.
pub trait Describe {
    fn describe(&self, context: &str, limit: usize) -> String;
}

impl Describe for String {
    fn describe(&self, _context: &str, limit: usize) -> String {
        limit_text(self, limit)
    }
}

/// Paging and focus operations shared by every browsable list, independent of
/// the item type. The navigation controller drives whichever list is current
/// through this trait.
pub trait Pageable {
    fn name(&self) -> &str;
    fn page_up(&mut self);
    fn page_down(&mut self);
    fn focus_up(&mut self);
    fn focus_down(&mut self);
    fn set_focus(&mut self, slot: usize);
    fn focus(&self) -> usize;
    fn is_first_selected(&self) -> bool;
    fn page_names(&self, context: &str, limit: usize) -> Vec<String>;
}

/// A bounded ordered collection with a visible-page cursor and an in-page
/// highlighted row.
///
/// Invariants: `focus < page_size`; whenever the list is non-empty the focused
/// slot points at a real item after any mutation through the public API; the
/// length never exceeds `capacity` once a capacity is set.
#[derive(Debug, Clone)]
pub struct WindowedList<T> {
    name: String,
    items: Vec<T>,
    /// 0 = unbounded
    capacity: usize,
    page_size: usize,
    /// Absolute index of the first visible item.
    location: usize,
    /// Offset of the highlighted row within the page.
    focus: usize,
}

impl<T> WindowedList<T> {
    pub fn new(name: impl Into<String>, page_size: usize) -> Self {
        Self::with_items(name, page_size, Vec::new())
    }

    /// Create a pre-seeded list. Capacity is not enforced at creation, a user
    /// may deliberately seed a large data set.
    pub fn with_items(name: impl Into<String>, page_size: usize, items: Vec<T>) -> Self {
        WindowedList {
            name: name.into(),
            items,
            capacity: 0,
            page_size: page_size.max(1),
            location: 0,
            focus: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn location(&self) -> usize {
        self.location
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_page_size(&mut self, rows: usize) {
        self.page_size = rows.max(1);
    }

    /// Set the maximum number of items kept, 0 for unbounded. Applies to
    /// subsequent insertions only.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Access an item by absolute index, bypassing the page window. Used for
    /// stable selection identity, not for the interactive hot path.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Append at the far end. New items arrive off-screen, so no cursor
    /// adjustment is needed; over capacity the oldest item (index 0) drops.
    pub fn push_back(&mut self, item: T) {
        self.items.push(item);
        if self.capacity > 0 && self.items.len() > self.capacity {
            self.items.remove(0);
        }
    }

    /// Prepend. Every existing index shifts by one, so the cursor follows:
    /// if the first page is visible the focus moves with its item, unless it
    /// sits in the very first or very last visible slot, which cannot track
    /// the same item any further and keeps pointing at the same slot; on a
    /// later page the whole window shifts instead. Over capacity the item at
    /// the far end drops.
    pub fn push_front(&mut self, item: T) {
        self.items.insert(0, item);
        if self.capacity > 0 && self.items.len() > self.capacity {
            self.items.pop();
        }
        if self.location == 0 {
            if self.focus > 0 && self.focus + 1 < self.page_size {
                self.focus += 1;
            }
        } else {
            self.location += 1;
        }
    }

    pub fn page_up(&mut self) {
        if self.location == 0 {
            // already on the first page, snap the focus to the top
            self.focus = 0;
        } else if self.location < self.page_size {
            self.location = 0;
        } else {
            self.location -= self.page_size;
        }
    }

    pub fn page_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.location + self.page_size >= self.items.len() {
            // within one page of the end, move the focus to the last real item
            self.focus = (self.items.len() - 1).saturating_sub(self.location);
        } else {
            self.location += self.page_size;
            if self.location + self.focus >= self.items.len() {
                self.focus = (self.items.len() - 1).saturating_sub(self.location);
            }
        }
    }

    /// Move the focus to the given row. No change if the row is outside the
    /// page or past the available data.
    pub fn set_focus(&mut self, slot: usize) {
        if slot < self.page_size && self.location + slot < self.items.len() {
            self.focus = slot;
        }
    }

    pub fn focus_up(&mut self) {
        if self.focus > 0 {
            self.set_focus(self.focus - 1);
        }
    }

    pub fn focus_down(&mut self) {
        self.set_focus(self.focus + 1);
    }

    /// Whether the very first item of the whole list is the highlighted one.
    /// Newly arrived clips are prepended, so this tells whether the user is
    /// looking at the newest entry.
    pub fn is_first_selected(&self) -> bool {
        self.location == 0 && self.focus == 0
    }

    /// Get the item at a page slot, taking the window location into account.
    pub fn get(&self, slot: usize) -> Result<&T, DataError> {
        if slot >= self.page_size {
            return Err(DataError::OutOfRange { slot });
        }
        self.items
            .get(self.location + slot)
            .ok_or(DataError::OutOfRange { slot })
    }

    /// Absolute index of the item at a page slot. Selections are stored by
    /// absolute index to stay valid while the window moves.
    pub fn absolute(&self, slot: usize) -> Result<usize, DataError> {
        self.get(slot)?;
        Ok(self.location + slot)
    }

    pub fn focused(&self) -> Result<&T, DataError> {
        self.get(self.focus)
    }
}

impl<T: Describe> WindowedList<T> {
    /// Display label for one page slot.
    pub fn slot_name(&self, slot: usize, context: &str, limit: usize) -> Result<String, DataError> {
        Ok(self.get(slot)?.describe(context, limit))
    }

    /// Display labels for the whole current page: always exactly `page_size`
    /// strings, with empty-string padding past the available data. This is
    /// the rendering contract, a page can be partially filled but never
    /// fails.
    pub fn page_names(&self, context: &str, limit: usize) -> Vec<String> {
        (0..self.page_size)
            .map(|slot| self.slot_name(slot, context, limit).unwrap_or_default())
            .collect()
    }
}

/// A nested list shows up under its own name when its parent is browsed.
impl<T> Describe for WindowedList<T> {
    fn describe(&self, _context: &str, _limit: usize) -> String {
        self.name.clone()
    }
}

impl<T: Describe> Pageable for WindowedList<T> {
    fn name(&self) -> &str {
        self.name()
    }

    fn page_up(&mut self) {
        self.page_up();
    }

    fn page_down(&mut self) {
        self.page_down();
    }

    fn focus_up(&mut self) {
        self.focus_up();
    }

    fn focus_down(&mut self) {
        self.focus_down();
    }

    fn set_focus(&mut self, slot: usize) {
        self.set_focus(slot);
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn is_first_selected(&self) -> bool {
        self.is_first_selected()
    }

    fn page_names(&self, context: &str, limit: usize) -> Vec<String> {
        self.page_names(context, limit)
    }
}

impl<U> WindowedList<WindowedList<U>> {
    /// Find a child list by name. Linear scan, not on the interactive hot
    /// path (that uses slot indexes).
    pub fn child_by_name(&self, name: &str) -> Result<&WindowedList<U>, DataError> {
        self.items
            .iter()
            .find(|child| child.name == name)
            .ok_or_else(|| DataError::NameNotFound {
                name: name.to_string(),
            })
    }

    pub fn child_by_name_mut(&mut self, name: &str) -> Result<&mut WindowedList<U>, DataError> {
        self.items
            .iter_mut()
            .find(|child| child.name == name)
            .ok_or_else(|| DataError::NameNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: usize = 5;

    fn seeded(count: usize) -> WindowedList<String> {
        WindowedList::with_items("SUT", ROWS, (0..count).map(|i| i.to_string()).collect())
    }

    fn get(sut: &WindowedList<String>, slot: usize) -> &str {
        sut.get(slot).unwrap()
    }

    #[test]
    fn test_init_empty() {
        let sut: WindowedList<String> = WindowedList::new("SUT", ROWS);
        assert_eq!(sut.get(0), Err(DataError::OutOfRange { slot: 0 }));
        assert!(sut.is_empty());
    }

    #[test]
    fn test_init_get_content() {
        let sut = WindowedList::with_items("SUT", ROWS, vec!["0".to_string(), "1".to_string()]);
        assert_eq!(get(&sut, 0), "0");
        assert_eq!(get(&sut, 1), "1");
        assert_eq!(sut.get(2), Err(DataError::OutOfRange { slot: 2 }));
    }

    #[test]
    fn test_get_content_outside_page() {
        let sut = seeded(10);
        assert_eq!(get(&sut, 4), "4");
        // slot 5 has data behind it but lies outside the page
        assert_eq!(sut.get(5), Err(DataError::OutOfRange { slot: 5 }));
    }

    #[test]
    fn test_slot_name_truncates() {
        let sut = WindowedList::with_items(
            "SUT",
            ROWS,
            vec!["0".to_string(), "Long\nand\nboring\ntext".to_string()],
        );
        assert_eq!(sut.slot_name(0, "", 10).unwrap(), "0");
        assert_eq!(sut.slot_name(1, "", 10).unwrap(), "Long [...]");
        assert_eq!(sut.slot_name(0, "optional text", 10).unwrap(), "0");
    }

    #[test]
    fn test_push_back() {
        let mut sut = WindowedList::with_items("SUT", ROWS, vec!["0".to_string(), "1".to_string()]);
        sut.push_back("2".to_string());
        sut.push_back("3".to_string());
        sut.push_back("4".to_string());
        sut.push_back("5".to_string()); // beyond the page, still stored
        assert_eq!(get(&sut, 1), "1");
        assert_eq!(get(&sut, 2), "2");
        assert_eq!(get(&sut, 3), "3");
        assert_eq!(get(&sut, 4), "4");
        assert_eq!(sut.len(), 6);
    }

    #[test]
    fn test_push_front() {
        let mut sut = WindowedList::with_items("SUT", ROWS, vec!["0".to_string(), "1".to_string()]);
        sut.push_front("-1".to_string());
        sut.push_front("-2".to_string());
        assert_eq!(get(&sut, 0), "-2");
        assert_eq!(get(&sut, 1), "-1");
        assert_eq!(get(&sut, 2), "0");
    }

    #[test]
    fn test_push_into_empty() {
        let mut sut: WindowedList<String> = WindowedList::new("SUT", ROWS);
        sut.push_front("-1".to_string());
        assert_eq!(get(&sut, 0), "-1");

        let mut sut: WindowedList<String> = WindowedList::new("SUT", ROWS);
        sut.push_back("1".to_string());
        assert_eq!(get(&sut, 0), "1");
    }

    #[test]
    fn test_capacity_push_back_drops_oldest() {
        let mut sut = seeded(19);
        sut.set_capacity(20);
        sut.push_back("19".to_string());
        assert_eq!(sut.len(), 20);
        sut.push_back("20".to_string());
        assert_eq!(sut.len(), 20);
        assert_eq!(get(&sut, 0), "1");
    }

    #[test]
    fn test_capacity_push_front_drops_far_end() {
        let mut sut = seeded(19);
        sut.set_capacity(20);
        sut.push_front("-1".to_string());
        assert_eq!(sut.len(), 20);
        sut.push_front("-2".to_string());
        assert_eq!(sut.len(), 20);
        assert_eq!(get(&sut, 0), "-2");
        assert_eq!(sut.item(19).map(String::as_str), Some("17"));
    }

    #[test]
    fn test_page_down_short_list() {
        let mut sut = seeded(6);
        sut.page_down();
        assert_eq!(get(&sut, 0), "5");
        assert_eq!(sut.get(1), Err(DataError::OutOfRange { slot: 1 }));
    }

    #[test]
    fn test_page_down_twice() {
        let mut sut = seeded(15);
        sut.page_down();
        sut.page_down();
        assert_eq!(get(&sut, 0), "10");
        assert_eq!(get(&sut, 4), "14");
    }

    #[test]
    fn test_page_down_at_end_is_idempotent() {
        let mut sut = seeded(15);
        sut.page_down();
        sut.page_down();
        sut.page_down();
        assert_eq!(get(&sut, 0), "10");
        assert_eq!(get(&sut, 4), "14");
    }

    #[test]
    fn test_page_up() {
        let mut sut = seeded(15);
        sut.page_down();
        sut.page_down();
        sut.page_up();
        assert_eq!(get(&sut, 0), "5");
        assert_eq!(get(&sut, 4), "9");
    }

    #[test]
    fn test_page_up_at_start_is_idempotent() {
        let mut sut = seeded(15);
        sut.page_down();
        sut.page_up();
        sut.page_up();
        assert_eq!(get(&sut, 0), "0");
        assert_eq!(get(&sut, 4), "4");
    }

    #[test]
    fn test_page_down_then_push_front_keeps_window() {
        let mut sut = seeded(15);
        sut.page_down();
        sut.push_front("-1".to_string());
        assert_eq!(get(&sut, 0), "5");
        assert_eq!(get(&sut, 4), "9");
    }

    #[test]
    fn test_page_up_after_push_front() {
        let mut sut = seeded(15);
        sut.page_down();
        sut.push_front("-1".to_string());
        sut.page_up();
        assert_eq!(get(&sut, 0), "0");
        sut.page_up();
        assert_eq!(get(&sut, 0), "-1");
        assert_eq!(get(&sut, 1), "0");
    }

    #[test]
    fn test_page_names_padded() {
        let sut = WindowedList::with_items("SUT", ROWS, vec!["0".to_string(), "1".to_string()]);
        assert_eq!(sut.page_names("", 30), vec!["0", "1", "", "", ""]);
        assert_eq!(sut.page_names("optional text", 30), vec!["0", "1", "", "", ""]);
    }

    #[test]
    fn test_page_names_full_page() {
        let sut = seeded(6);
        assert_eq!(sut.page_names("", 30), vec!["0", "1", "2", "3", "4"]);
        assert_eq!(sut.page_names("", 30).len(), ROWS);
    }

    #[test]
    fn test_focused_default() {
        let sut = seeded(6);
        assert_eq!(sut.focused().unwrap(), "0");
    }

    #[test]
    fn test_set_focus_clamps() {
        let mut sut = seeded(6);
        sut.set_focus(2);
        assert_eq!(sut.focused().unwrap(), "2");
        sut.set_focus(5); // outside the page, no change
        assert_eq!(sut.focused().unwrap(), "2");
    }

    #[test]
    fn test_set_focus_past_data() {
        let mut sut = seeded(3);
        sut.set_focus(4); // inside the page but past the data
        assert_eq!(sut.focused().unwrap(), "0");
    }

    #[test]
    fn test_focus_up_down() {
        let mut sut = seeded(6);
        sut.set_focus(2);
        sut.focus_up();
        assert_eq!(sut.focused().unwrap(), "1");
        sut.focus_down();
        sut.focus_down();
        assert_eq!(sut.focused().unwrap(), "3");
    }

    #[test]
    fn test_focus_up_at_top() {
        let mut sut = seeded(6);
        sut.focus_up();
        assert_eq!(sut.focused().unwrap(), "0");
    }

    #[test]
    fn test_focus_after_page_down_short() {
        let mut sut = seeded(6);
        sut.set_focus(2);
        sut.page_down();
        assert_eq!(sut.focused().unwrap(), "5");
    }

    #[test]
    fn test_focus_after_page_down_long() {
        let mut sut = seeded(10);
        sut.set_focus(2);
        sut.page_down();
        assert_eq!(sut.focused().unwrap(), "7");
        sut.page_down();
        assert_eq!(sut.focused().unwrap(), "9");
    }

    #[test]
    fn test_focus_page_round_trip() {
        let mut sut = seeded(10);
        sut.set_focus(2);
        sut.page_down();
        sut.page_up();
        assert_eq!(sut.focused().unwrap(), "2");
    }

    #[test]
    fn test_focus_page_up_snaps_to_top() {
        let mut sut = seeded(6);
        sut.set_focus(2);
        sut.page_up();
        assert_eq!(sut.focused().unwrap(), "0");
    }

    #[test]
    fn test_focus_stays_on_push_back() {
        let mut sut = WindowedList::with_items("SUT", ROWS, vec!["0".to_string(), "1".to_string()]);
        sut.push_back("2".to_string());
        assert_eq!(sut.focused().unwrap(), "0");
        sut.set_focus(2);
        sut.push_back("3".to_string());
        assert_eq!(sut.focused().unwrap(), "2");
    }

    #[test]
    fn test_focus_follows_item_on_push_front() {
        let mut sut = WindowedList::with_items("SUT", ROWS, vec!["0".to_string(), "1".to_string()]);
        assert_eq!(sut.focused().unwrap(), "0");
        sut.push_front("-1".to_string()); // first slot focused, stays put
        assert_eq!(sut.focused().unwrap(), "-1");
        sut.set_focus(2); // now on '1'
        sut.push_front("-2".to_string()); // focus moves with the item
        assert_eq!(sut.focused().unwrap(), "1");
    }

    #[test]
    fn test_focus_clamped_at_last_slot_on_push_front() {
        let mut sut = seeded(6);
        sut.set_focus(4); // last possible slot, cannot track further
        sut.push_front("-1".to_string());
        assert_eq!(sut.focused().unwrap(), "3");
    }

    #[test]
    fn test_push_front_on_later_page_keeps_focus() {
        let mut sut = seeded(6);
        sut.page_down();
        sut.push_front("-1".to_string());
        assert_eq!(sut.focused().unwrap(), "5");
    }

    #[test]
    fn test_push_front_on_later_page_last_slot() {
        let mut sut = seeded(10);
        sut.set_focus(4);
        sut.page_down();
        sut.push_front("-1".to_string());
        assert_eq!(sut.focused().unwrap(), "9");
    }

    #[test]
    fn test_is_first_selected() {
        let mut sut = seeded(10);
        assert!(sut.is_first_selected());
        sut.set_focus(4);
        assert!(!sut.is_first_selected());
    }

    #[test]
    fn test_is_first_selected_after_page_down() {
        let mut sut = seeded(10);
        sut.page_down();
        assert!(!sut.is_first_selected());
    }

    #[test]
    fn test_absolute_index() {
        let mut sut = seeded(15);
        sut.page_down();
        assert_eq!(sut.absolute(2), Ok(7));
        assert_eq!(sut.absolute(5), Err(DataError::OutOfRange { slot: 5 }));
    }

    #[test]
    fn test_window_matches_absolute_order() {
        // every visible slot maps to the item at location + slot
        let mut sut = seeded(13);
        sut.page_down();
        for slot in 0..ROWS {
            if let Ok(item) = sut.get(slot) {
                assert_eq!(item, sut.item(sut.location() + slot).unwrap());
            }
        }
    }

    #[test]
    fn test_child_by_name() {
        let mut sut: WindowedList<WindowedList<String>> = WindowedList::new("SUT", ROWS);
        sut.push_back(WindowedList::new("zero", ROWS));
        sut.push_back(WindowedList::new("one", ROWS));
        assert_eq!(sut.child_by_name("zero").unwrap().name(), "zero");
        assert_eq!(sut.child_by_name("one").unwrap().name(), "one");
        assert!(matches!(
            sut.child_by_name("two"),
            Err(DataError::NameNotFound { .. })
        ));
    }

    #[test]
    fn test_nested_list_describes_as_name() {
        let mut sut: WindowedList<WindowedList<String>> = WindowedList::new("SUT", ROWS);
        sut.push_back(WindowedList::new("zero", ROWS));
        assert_eq!(sut.slot_name(0, "", 30).unwrap(), "zero");
    }
}
