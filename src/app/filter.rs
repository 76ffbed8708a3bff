//! Inline list filter.
//!
//! Matching is a case-insensitive substring search where only ASCII letters
//! are folded; any other byte must match exactly.

/// Indices of `items` containing `needle`, in list order.
///
/// An empty needle matches everything.
#[must_use]
pub fn filter_indices(items: &[String], needle: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| contains_ignore_ascii_case(item, needle))
        .map(|(idx, _)| idx)
        .collect()
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Filter state for the current view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    active: bool,
    text: String,
    indices: Vec<usize>,
}

impl Filter {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Matching indices into the unfiltered list.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Start filtering with empty text; everything matches.
    pub fn activate(&mut self, items: &[String]) {
        self.active = true;
        self.text.clear();
        self.refresh(items);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.text.clear();
        self.indices.clear();
    }

    pub fn push(&mut self, c: char, items: &[String]) {
        self.text.push(c);
        self.refresh(items);
    }

    /// Remove the last character. Returns false when already empty.
    pub fn pop(&mut self, items: &[String]) -> bool {
        let removed = self.text.pop().is_some();
        if removed {
            self.refresh(items);
        }
        removed
    }

    /// Recompute matches, e.g. after the underlying list reloads.
    pub fn refresh(&mut self, items: &[String]) {
        self.indices = filter_indices(items, &self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_empty_needle_matches_all() {
        let list = items(&["a", "b", "c"]);
        assert_eq!(filter_indices(&list, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_ascii_case_folding() {
        let list = items(&["EDITOR=nvim", "PAGER=less", "editor_alt=vi"]);
        assert_eq!(filter_indices(&list, "editor"), vec![0, 2]);
        assert_eq!(filter_indices(&list, "LESS"), vec![1]);
    }

    #[test]
    fn test_non_ascii_matched_verbatim() {
        let list = items(&["Ärger", "ärger"]);
        assert_eq!(filter_indices(&list, "ä"), vec![1]);
        assert_eq!(filter_indices(&list, "RGER"), vec![0, 1]);
    }

    #[test]
    fn test_needle_longer_than_item() {
        let list = items(&["ab"]);
        assert!(filter_indices(&list, "abc").is_empty());
    }

    #[test]
    fn test_filter_lifecycle() {
        let list = items(&["git", "cargo", "go"]);
        let mut filter = Filter::default();
        filter.activate(&list);
        assert!(filter.is_active());
        assert_eq!(filter.indices(), &[0, 1, 2]);

        filter.push('g', &list);
        filter.push('o', &list);
        assert_eq!(filter.text(), "go");
        assert_eq!(filter.indices(), &[1, 2]);

        assert!(filter.pop(&list));
        assert_eq!(filter.indices(), &[0, 1, 2]);
        assert!(filter.pop(&list));
        assert!(!filter.pop(&list));

        filter.deactivate();
        assert!(!filter.is_active());
        assert!(filter.indices().is_empty());
    }
}
