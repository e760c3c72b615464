//! Selector widget: cycles through a fixed list of items

use carta_core::Key;
use serde_json::{json, Value};

use crate::options::Extras;

/// One selectable entry
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorItem {
    pub title: String,
    /// Arbitrary values attached to the item
    pub values: Vec<Value>,
}

impl SelectorItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            values: Vec::new(),
        }
    }

    pub fn with_values(title: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            title: title.into(),
            values,
        }
    }
}

/// `(item, index, extras)`
pub type SelectorCallback = Box<dyn FnMut(&SelectorItem, usize, &Extras)>;

pub struct Selector {
    items: Vec<SelectorItem>,
    index: usize,
    onchange: Option<SelectorCallback>,
    onreturn: Option<SelectorCallback>,
    extras: Extras,
}

impl Selector {
    /// `items` must be non-empty and `index` in range; the factory checks both
    pub(crate) fn new(items: Vec<SelectorItem>, index: usize) -> Self {
        Self {
            items,
            index,
            onchange: None,
            onreturn: None,
            extras: Extras::new(),
        }
    }

    pub(crate) fn with_callbacks(
        mut self,
        onchange: Option<SelectorCallback>,
        onreturn: Option<SelectorCallback>,
        extras: Extras,
    ) -> Self {
        self.onchange = onchange;
        self.onreturn = onreturn;
        self.extras = extras;
        self
    }

    pub fn items(&self) -> &[SelectorItem] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&SelectorItem> {
        self.items.get(self.index)
    }

    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Select the previous item, wrapping around
    pub fn left(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
        self.fire_change();
    }

    /// Select the next item, wrapping around
    pub fn right(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
        self.fire_change();
    }

    pub fn apply(&mut self) {
        if let (Some(callback), Some(item)) = (self.onreturn.as_mut(), self.items.get(self.index)) {
            callback(item, self.index, &self.extras);
        }
    }

    pub(crate) fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Left => self.left(),
            Key::Right => self.right(),
            Key::Return => self.apply(),
            _ => return false,
        }
        true
    }

    /// `[title, index]` of the current item
    pub fn value(&self) -> Option<Value> {
        self.current().map(|item| json!([item.title, self.index]))
    }

    fn fire_change(&mut self) {
        if let (Some(callback), Some(item)) = (self.onchange.as_mut(), self.items.get(self.index)) {
            callback(item, self.index, &self.extras);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn items() -> Vec<SelectorItem> {
        vec![
            SelectorItem::new("easy"),
            SelectorItem::new("normal"),
            SelectorItem::new("hard"),
        ]
    }

    #[test]
    fn test_cycles_in_both_directions() {
        let mut selector = Selector::new(items(), 0);
        selector.left();
        assert_eq!(selector.index(), 2);
        selector.right();
        selector.right();
        assert_eq!(selector.index(), 1);
        assert_eq!(selector.value(), Some(json!(["normal", 1])));
    }

    #[test]
    fn test_callbacks_see_item_and_extras() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let change_log = log.clone();
        let return_log = log.clone();
        let mut extras = Extras::new();
        extras.insert("slot".into(), json!("a"));

        let mut selector = Selector::new(items(), 1).with_callbacks(
            Some(Box::new(move |item, index, extras| {
                change_log
                    .borrow_mut()
                    .push(format!("change {} {} {}", item.title, index, extras["slot"]));
            })),
            Some(Box::new(move |item, index, _| {
                return_log
                    .borrow_mut()
                    .push(format!("return {} {}", item.title, index));
            })),
            extras,
        );

        assert!(selector.handle_key(&Key::Right));
        assert!(selector.handle_key(&Key::Return));
        assert!(!selector.handle_key(&Key::Up));
        assert_eq!(
            *log.borrow(),
            vec!["change hard 2 \"a\"".to_string(), "return hard 2".to_string()]
        );
    }
}
