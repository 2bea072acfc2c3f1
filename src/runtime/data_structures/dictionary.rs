use crate::runtime::data_structures::cell::Cell;
use std::collections::HashMap;

/// The dictionary used by the interpreter to keep track of every named word.  Binding a name that
/// is already bound replaces the old binding, there is no way to remove one.
///
/// Anything that already holds a reference to the old binding, such as a compiled word body, keeps
/// it.
#[derive(Default)]
pub struct Dictionary {
    words: HashMap<String, Cell>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Bind the name, shadowing any earlier binding of the same name.
    pub fn add(&mut self, name: String, cell: Cell) {
        let _ = self.words.insert(name, cell);
    }

    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.words.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All of the bound names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.words.keys().map(String::as_str).collect();
        names.sort_unstable();

        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_binding_shadows_earlier() {
        let mut dictionary = Dictionary::new();

        dictionary.add("a".to_string(), Cell::Int(1));
        dictionary.add("a".to_string(), Cell::Int(2));

        assert_eq!(dictionary.get("a"), Some(&Cell::Int(2)));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn lookup_of_missing_name() {
        let mut dictionary = Dictionary::new();
        dictionary.add("b".to_string(), Cell::Int(0));
        dictionary.add("a".to_string(), Cell::Int(0));

        assert!(dictionary.get("c").is_none());
        assert!(!dictionary.contains("c"));
        assert_eq!(dictionary.names(), vec!["a", "b"]);
    }
}
