use crate::attributes::ensure_consumed;
use crate::error::{MenuError, Result};
use crate::options::StyleOverrides;
use crate::widget::{Button, ButtonAction, SelectCallback, Widget, WidgetKind};

use super::WidgetManager;

/// Button parameters
pub struct ButtonParams {
    /// Empty for a generated ID
    pub button_id: String,
    /// Menus to go back for [`ButtonAction::Back`], at least 1
    pub back_count: usize,
    /// Keep unrecognized style keys and hand them to the callback
    pub accept_extra_parameters: bool,
    pub onselect: Option<SelectCallback>,
    pub style: StyleOverrides,
}

impl Default for ButtonParams {
    fn default() -> Self {
        Self {
            button_id: String::new(),
            back_count: 1,
            accept_extra_parameters: false,
            onselect: None,
            style: StyleOverrides::default(),
        }
    }
}

impl WidgetManager<'_> {
    /// Add a button.
    ///
    /// A button opening a submenu links it to this menu; the link is
    /// refused if it would make the menu graph cyclic.
    pub fn button(
        &mut self,
        title: impl Into<String>,
        action: ButtonAction,
        params: ButtonParams,
    ) -> Result<&mut Widget> {
        let ButtonParams {
            button_id,
            back_count,
            accept_extra_parameters,
            onselect,
            mut style,
        } = params;
        let title = title.into();

        if back_count < 1 {
            return Err(MenuError::validation(
                "back_count",
                "must be equal or greater than 1",
            ));
        }

        let submenu = match &action {
            ButtonAction::OpenSubmenu(target) => {
                let target = *target;
                let target_title = self
                    .tree
                    .menu(target)
                    .ok_or(MenuError::UnknownMenu)?
                    .title()
                    .to_string();
                if target == self.menu || self.tree.in_submenu(target, self.menu, true) {
                    return Err(MenuError::RecursiveSubmenu(target_title));
                }
                Some(target)
            }
            _ => None,
        };

        let bundle = self.resolve(&mut style)?;
        let extras = if accept_extra_parameters {
            style.take_extras()
        } else {
            if let Err(err) = ensure_consumed(&style) {
                tracing::warn!(
                    "button cannot accept extra parameters; set accept_extra_parameters to pass them to the callback"
                );
                return Err(err);
            }
            Default::default()
        };

        let kind = Button::new(action)
            .with_back_count(back_count)
            .with_extras(extras);
        let mut widget = Widget::new(button_id, title, WidgetKind::Button(kind));
        widget.base_mut().set_onselect(onselect);
        self.configure(&mut widget, bundle)?;

        let menu = self.menu_mut()?;
        if let Some(target) = submenu {
            menu.add_submenu(target);
        }
        menu.append_widget(widget)
    }
}
