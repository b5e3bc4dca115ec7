use std::collections::HashSet;

/// Three-state header checkbox derived from the visible rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Выбранные строки экрана списка (ключи записей)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, key: &str, checked: bool) {
        if checked {
            self.keys.insert(key.to_string());
        } else {
            self.keys.remove(key);
        }
    }

    /// Header checkbox: check or uncheck every visible row
    pub fn set_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>, checked: bool) {
        for key in keys {
            self.toggle(key, checked);
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected keys in a stable order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys.iter().cloned().collect();
        keys.sort();
        keys
    }

    pub fn header_state<'a>(&self, visible: impl IntoIterator<Item = &'a str>) -> HeaderCheckState {
        let mut total = 0;
        let mut checked = 0;
        for key in visible {
            total += 1;
            if self.keys.contains(key) {
                checked += 1;
            }
        }
        if total == 0 || checked == 0 {
            HeaderCheckState::Unchecked
        } else if checked == total {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_keys() {
        let mut sel = SelectionSet::new();
        sel.toggle("3", true);
        sel.toggle("1", true);
        sel.toggle("3", false);
        assert_eq!(sel.keys(), vec!["1".to_string()]);
    }

    #[test]
    fn test_header_state() {
        let visible = ["1", "2", "3"];
        let mut sel = SelectionSet::new();
        assert_eq!(sel.header_state(visible), HeaderCheckState::Unchecked);
        sel.toggle("2", true);
        assert_eq!(sel.header_state(visible), HeaderCheckState::Indeterminate);
        sel.set_all(visible, true);
        assert_eq!(sel.header_state(visible), HeaderCheckState::Checked);
        sel.set_all(visible, false);
        assert!(sel.is_empty());
        assert_eq!(sel.header_state([]), HeaderCheckState::Unchecked);
    }
}
