//! Binding widgets to their menu
//!
//! Binding is one-shot: it records the owning menu, checks the ID against
//! the menu's used IDs, hands the widget the menu's input-device handles
//! and applies the resolved style.

use crate::attributes::AttributeBundle;
use crate::error::{MenuError, Result};
use crate::menu::Menu;
use crate::widget::Widget;

/// Bind `widget` to `menu` and apply `bundle`
pub fn bind(widget: &mut Widget, bundle: AttributeBundle, menu: &Menu) -> Result<()> {
    attach(widget, menu)?;
    widget.base_mut().apply_style(bundle);
    Ok(())
}

/// Bind `widget` to `menu` keeping whatever style it already has
pub fn attach(widget: &mut Widget, menu: &Menu) -> Result<()> {
    if widget.menu().is_some() {
        return Err(MenuError::AlreadyBound(widget.id().to_string()));
    }
    menu.check_id_duplicated(widget.id())?;

    let base = widget.base_mut();
    base.set_menu(menu.id())?;
    base.set_controls(menu.controls().clone());
    tracing::trace!(id = %widget.id(), menu = %menu.title(), "widget bound");
    Ok(())
}
