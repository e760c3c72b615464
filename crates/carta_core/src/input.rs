//! Input devices and menu key events
//!
//! A menu owns one [`InputControls`] set. Every widget bound to the menu
//! holds clones of the same handles, so toggling a device on the menu is
//! immediately visible to all of its widgets.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Kind of input device
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Mouse or any other pointing device
    Pointer,
    /// Keyboard and joystick navigation
    Keyboard,
    /// Touch screen
    Touch,
}

/// Shared enable flag for one input device
#[derive(Clone)]
pub struct DeviceHandle {
    kind: DeviceKind,
    enabled: Rc<Cell<bool>>,
}

impl DeviceHandle {
    pub fn new(kind: DeviceKind, enabled: bool) -> Self {
        Self {
            kind,
            enabled: Rc::new(Cell::new(enabled)),
        }
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// Whether two handles point at the same device flag
    pub fn shares_with(&self, other: &DeviceHandle) -> bool {
        Rc::ptr_eq(&self.enabled, &other.enabled)
    }
}

impl fmt::Debug for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceHandle")
            .field("kind", &self.kind)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// The set of device handles owned by a menu
#[derive(Clone, Debug)]
pub struct InputControls {
    pub pointer: DeviceHandle,
    pub keyboard: DeviceHandle,
    pub touch: DeviceHandle,
}

impl InputControls {
    pub fn new(pointer: bool, keyboard: bool, touch: bool) -> Self {
        Self {
            pointer: DeviceHandle::new(DeviceKind::Pointer, pointer),
            keyboard: DeviceHandle::new(DeviceKind::Keyboard, keyboard),
            touch: DeviceHandle::new(DeviceKind::Touch, touch),
        }
    }

    pub fn device(&self, kind: DeviceKind) -> &DeviceHandle {
        match kind {
            DeviceKind::Pointer => &self.pointer,
            DeviceKind::Keyboard => &self.keyboard,
            DeviceKind::Touch => &self.touch,
        }
    }
}

impl Default for InputControls {
    fn default() -> Self {
        // Touch is opt-in
        Self::new(true, true, false)
    }
}

/// Platform-agnostic key events understood by menu widgets
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Return,
    Backspace,
    Delete,
    Tab,
    /// A typed character
    Char(char),
    /// Clipboard paste
    Paste(String),
}
