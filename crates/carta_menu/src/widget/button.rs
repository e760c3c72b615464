//! Button widget

use crate::options::Extras;
use crate::tree::MenuId;

/// Callback run by a [`ButtonAction::Callback`] button
pub type ButtonCallback = Box<dyn FnMut(&Extras)>;

/// What a button does when applied
pub enum ButtonAction {
    /// Open a submenu
    OpenSubmenu(MenuId),
    /// Return to the previous menu
    Back,
    /// Close the menu tree
    Close,
    /// Request application exit
    Exit,
    /// Nothing
    None,
    /// Return to the root menu
    Reset,
    /// Run a user function with the button's extra parameters
    Callback(ButtonCallback),
}

impl ButtonAction {
    pub fn callback(f: impl FnMut(&Extras) + 'static) -> Self {
        Self::Callback(Box::new(f))
    }

    fn name(&self) -> &'static str {
        match self {
            Self::OpenSubmenu(_) => "open_submenu",
            Self::Back => "back",
            Self::Close => "close",
            Self::Exit => "exit",
            Self::None => "none",
            Self::Reset => "reset",
            Self::Callback(_) => "callback",
        }
    }
}

/// Navigation requested by applying a button, routed by the menu tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonOutcome {
    OpenSubmenu(MenuId),
    /// Go back this many menus
    Back(usize),
    Close,
    Exit,
    Reset,
    None,
}

pub struct Button {
    action: ButtonAction,
    back_count: usize,
    extras: Extras,
}

impl Button {
    pub fn new(action: ButtonAction) -> Self {
        Self {
            action,
            back_count: 1,
            extras: Extras::new(),
        }
    }

    pub(crate) fn with_back_count(mut self, back_count: usize) -> Self {
        self.back_count = back_count;
        self
    }

    pub(crate) fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    pub fn action_name(&self) -> &'static str {
        self.action.name()
    }

    /// Submenu opened by this button, if any
    pub fn opens_submenu(&self) -> Option<MenuId> {
        match self.action {
            ButtonAction::OpenSubmenu(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn back_count(&self) -> usize {
        self.back_count
    }

    /// Parameters forwarded to the callback
    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Run the action
    pub fn apply(&mut self) -> ButtonOutcome {
        match &mut self.action {
            ButtonAction::OpenSubmenu(menu) => ButtonOutcome::OpenSubmenu(*menu),
            ButtonAction::Back => ButtonOutcome::Back(self.back_count),
            ButtonAction::Close => ButtonOutcome::Close,
            ButtonAction::Exit => ButtonOutcome::Exit,
            ButtonAction::None => ButtonOutcome::None,
            ButtonAction::Reset => ButtonOutcome::Reset,
            ButtonAction::Callback(callback) => {
                callback(&self.extras);
                ButtonOutcome::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_callback_receives_extras() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut extras = Extras::new();
        extras.insert("level".into(), json!(3));

        let mut button = Button::new(ButtonAction::callback(move |extras| {
            sink.borrow_mut().push(extras.get("level").cloned());
        }))
        .with_extras(extras);

        assert_eq!(button.apply(), ButtonOutcome::None);
        assert_eq!(button.apply(), ButtonOutcome::None);
        assert_eq!(*seen.borrow(), vec![Some(json!(3)), Some(json!(3))]);
    }

    #[test]
    fn test_back_uses_count() {
        let mut button = Button::new(ButtonAction::Back).with_back_count(2);
        assert_eq!(button.apply(), ButtonOutcome::Back(2));
        assert_eq!(button.opens_submenu(), None);
    }
}
