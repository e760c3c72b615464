//! Menu tree and navigation
//!
//! Menus are stored in a slot map and refer to each other by [`MenuId`].
//! Widgets keep the ID of the menu that owns them; submenu links are IDs
//! too, so cycles are detected by walking the tree rather than prevented
//! by ownership.

use carta_core::Key;
use carta_theme::Theme;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde_json::Value;
use slotmap::{new_key_type, SlotMap};

use crate::error::{MenuError, Result};
use crate::manager::WidgetManager;
use crate::menu::{Menu, MenuConfig};
use crate::widget::{ButtonOutcome, Widget, WidgetResponse};

new_key_type! {
    pub struct MenuId;
}

/// Arena of menus plus the navigation stack
#[derive(Default)]
pub struct MenuTree {
    menus: SlotMap<MenuId, Menu>,
    root: Option<MenuId>,
    stack: Vec<MenuId>,
    closed: bool,
    exited: bool,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a menu with default settings; the first menu becomes the root
    pub fn new_menu(&mut self, title: impl Into<String>, theme: Theme) -> MenuId {
        self.new_menu_with(MenuConfig::new(title, theme))
    }

    pub fn new_menu_with(&mut self, config: MenuConfig) -> MenuId {
        let id = self.menus.insert_with_key(|id| Menu::new(id, config));
        if self.root.is_none() {
            self.root = Some(id);
            self.stack.push(id);
        }
        id
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(id)
    }

    pub fn menu_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.menus.get_mut(id)
    }

    pub fn root(&self) -> Option<MenuId> {
        self.root
    }

    /// Menu currently shown
    pub fn current(&self) -> Option<MenuId> {
        self.stack.last().copied()
    }

    /// Navigation depth, 0 at the root
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Widget factory for `menu`
    pub fn add(&mut self, menu: MenuId) -> Result<WidgetManager<'_>> {
        if !self.menus.contains_key(menu) {
            return Err(MenuError::UnknownMenu);
        }
        Ok(WidgetManager::new(self, menu))
    }

    /// Whether `target` is a submenu of `menu`, searching the whole
    /// subtree when `recursive`
    pub fn in_submenu(&self, menu: MenuId, target: MenuId, recursive: bool) -> bool {
        let Some(start) = self.menus.get(menu) else {
            return false;
        };
        if !recursive {
            return start.submenus().contains(&target);
        }

        let mut visited = FxHashSet::default();
        let mut pending = vec![menu];
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(node) = self.menus.get(current) else {
                continue;
            };
            for &sub in node.submenus() {
                if sub == target {
                    return true;
                }
                pending.push(sub);
            }
        }
        false
    }

    /// Show `menu` on top of the current one
    pub fn open(&mut self, menu: MenuId) -> Result<()> {
        if !self.menus.contains_key(menu) {
            return Err(MenuError::UnknownMenu);
        }
        if self.current() != Some(menu) {
            self.stack.push(menu);
        }
        self.closed = false;
        tracing::debug!(depth = self.depth(), "menu opened");
        Ok(())
    }

    /// Go back `count` menus; going back from the root closes the tree
    pub fn back(&mut self, count: usize) {
        for _ in 0..count {
            if self.stack.len() > 1 {
                self.stack.pop();
            } else {
                self.close();
                break;
            }
        }
        tracing::debug!(depth = self.depth(), "menu back");
    }

    pub fn reset_to_root(&mut self) {
        self.stack.truncate(1);
        tracing::debug!("menu reset to root");
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Flag the application for exit
    pub fn exit(&mut self) {
        self.exited = true;
        self.closed = true;
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Apply the selected widget of the current menu and route its outcome
    pub fn apply_selected(&mut self) -> Result<WidgetResponse> {
        let current = self.current().ok_or(MenuError::UnknownMenu)?;
        let menu = self.menus.get_mut(current).ok_or(MenuError::UnknownMenu)?;
        let response = match menu.selected_widget_mut() {
            Some(widget) => widget.apply(),
            None => WidgetResponse::Ignored,
        };
        self.route(response)?;
        Ok(response)
    }

    /// Feed a key to the current menu and route navigation requests
    pub fn handle_key(&mut self, key: &Key) -> Result<WidgetResponse> {
        if self.closed {
            return Ok(WidgetResponse::Ignored);
        }
        let current = self.current().ok_or(MenuError::UnknownMenu)?;
        let menu = self.menus.get_mut(current).ok_or(MenuError::UnknownMenu)?;
        let response = menu.handle_key(key);
        self.route(response)?;
        Ok(response)
    }

    fn route(&mut self, response: WidgetResponse) -> Result<()> {
        let WidgetResponse::Navigate(outcome) = response else {
            return Ok(());
        };
        match outcome {
            ButtonOutcome::OpenSubmenu(menu) => self.open(menu)?,
            ButtonOutcome::Back(count) => self.back(count),
            ButtonOutcome::Close => self.close(),
            ButtonOutcome::Exit => self.exit(),
            ButtonOutcome::Reset => self.reset_to_root(),
            ButtonOutcome::None => {}
        }
        Ok(())
    }

    /// Find a widget by ID in `menu`, then in its submenus when `recursive`
    pub fn get_widget(&self, menu: MenuId, id: &str, recursive: bool) -> Option<&Widget> {
        let (owner, index) = self.locate(menu, id, recursive)?;
        self.menus.get(owner)?.widgets().get(index)
    }

    pub fn get_widget_mut(&mut self, menu: MenuId, id: &str, recursive: bool) -> Option<&mut Widget> {
        let (owner, _) = self.locate(menu, id, recursive)?;
        self.menus.get_mut(owner)?.widget_mut(id)
    }

    fn locate(&self, menu: MenuId, id: &str, recursive: bool) -> Option<(MenuId, usize)> {
        let mut visited = FxHashSet::default();
        let mut pending = vec![menu];
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let node = self.menus.get(current)?;
            if let Some(index) = node.widgets().iter().position(|w| w.id() == id) {
                return Some((current, index));
            }
            if recursive {
                // Reverse so submenus are searched in link order
                pending.extend(node.submenus().iter().rev());
            }
        }
        None
    }

    /// Collect `id -> value` from the value-bearing widgets of `menu`, and
    /// of its submenus when `recursive`. The same ID reported twice is an
    /// [`MenuError::InputCollision`].
    pub fn input_data(&self, menu: MenuId, recursive: bool) -> Result<IndexMap<String, Value>> {
        let mut data = IndexMap::new();
        let mut visited = FxHashSet::default();
        self.collect_input(menu, 0, recursive, &mut visited, &mut data)?;
        Ok(data)
    }

    fn collect_input(
        &self,
        menu: MenuId,
        depth: usize,
        recursive: bool,
        visited: &mut FxHashSet<MenuId>,
        data: &mut IndexMap<String, Value>,
    ) -> Result<()> {
        if !visited.insert(menu) {
            return Ok(());
        }
        let node = self.menus.get(menu).ok_or(MenuError::UnknownMenu)?;
        for widget in node.widgets() {
            let Some(value) = widget.value() else {
                continue;
            };
            if data.contains_key(widget.id()) {
                return Err(MenuError::InputCollision {
                    id: widget.id().to_string(),
                    depth,
                });
            }
            data.insert(widget.id().to_string(), value);
        }
        if recursive {
            for &sub in node.submenus() {
                self.collect_input(sub, depth + 1, recursive, visited, data)?;
            }
        }
        Ok(())
    }
}
