//! Menu widgets
//!
//! A [`Widget`] pairs the state every widget shares ([`WidgetBase`]: ID,
//! owning menu, selection, style, input devices) with kind-specific state
//! ([`WidgetKind`]). Widgets are created by the menu's
//! [`WidgetManager`](crate::manager::WidgetManager); a caller-built widget
//! enters a menu through its generic passthrough.

mod button;
mod color_input;
mod image;
mod placeholder;
mod selector;
mod style;
mod text_input;
mod toggle_switch;

use std::fmt;
use std::rc::Rc;

use carta_core::{InputControls, Key};
use serde_json::Value;

use crate::attributes::AttributeBundle;
use crate::error::{MenuError, Result};
use crate::measure::TextMeasurer;
use crate::tree::MenuId;

pub use button::{Button, ButtonAction, ButtonCallback, ButtonOutcome};
pub use color_input::{ColorCallback, ColorInput, ColorInputOptions, ColorMode, ColorValue, HexFormat};
pub use image::Image;
pub use placeholder::{DrawHook, NoneWidget};
pub use selector::{Selector, SelectorCallback, SelectorItem};
pub use style::{Border, FontStyle, TextShadow, WidgetStyle};
pub use text_input::{CursorStyle, InputType, TextCallback, TextInput, TextInputOptions};
pub use toggle_switch::{SwitchAppearance, ToggleCallback, ToggleSwitch};

/// `(selected, widget id)`; shared by the lines of a split label
pub type SelectCallback = Rc<dyn Fn(bool, &str)>;

/// Widget kinds implemented outside this crate
pub trait CustomWidget {
    /// Handle a key; return whether the widget changed
    fn handle_key(&mut self, _key: &Key) -> bool {
        false
    }

    /// Value reported in the menu's input data
    fn value(&self) -> Option<Value> {
        None
    }

    /// Content height in px, without padding and margin
    fn content_height(&self, measurer: &dyn TextMeasurer, style: &WidgetStyle) -> f32 {
        measurer.line_height(style.font.size)
    }
}

/// Result of feeding an event to a widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetResponse {
    /// Nothing happened
    Ignored,
    /// The widget state changed
    Updated,
    /// A button asks the menu tree to navigate
    Navigate(ButtonOutcome),
}

pub enum WidgetKind {
    Button(Button),
    Label,
    Image(Image),
    Selector(Selector),
    ToggleSwitch(ToggleSwitch),
    TextInput(TextInput),
    ColorInput(ColorInput),
    VMargin,
    NoneWidget(NoneWidget),
    Custom(Box<dyn CustomWidget>),
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Button(_) => "button",
            Self::Label => "label",
            Self::Image(_) => "image",
            Self::Selector(_) => "selector",
            Self::ToggleSwitch(_) => "toggle_switch",
            Self::TextInput(_) => "text_input",
            Self::ColorInput(_) => "color_input",
            Self::VMargin => "vmargin",
            Self::NoneWidget(_) => "none",
            Self::Custom(_) => "custom",
        }
    }

    fn selectable_by_default(&self) -> bool {
        !matches!(
            self,
            Self::Label | Self::Image(_) | Self::VMargin | Self::NoneWidget(_)
        )
    }
}

/// State shared by every widget kind
pub struct WidgetBase {
    id: String,
    title: String,
    menu: Option<MenuId>,
    selectable: bool,
    selected: bool,
    readonly: bool,
    style: Option<WidgetStyle>,
    controls: Option<InputControls>,
    onselect: Option<SelectCallback>,
}

impl WidgetBase {
    /// An empty `id` is replaced by a random UUID
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let mut id = id.into();
        if id.is_empty() {
            id = uuid::Uuid::new_v4().to_string();
        }
        Self {
            id,
            title: title.into(),
            menu: None,
            selectable: false,
            selected: false,
            readonly: false,
            style: None,
            controls: None,
            onselect: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Change the ID; only allowed before the widget joins a menu
    pub fn set_id(&mut self, id: impl Into<String>) -> Result<()> {
        if self.menu.is_some() {
            return Err(MenuError::AlreadyBound(self.id.clone()));
        }
        self.id = id.into();
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn menu(&self) -> Option<MenuId> {
        self.menu
    }

    /// Bind the widget to its menu, once
    pub fn set_menu(&mut self, menu: MenuId) -> Result<()> {
        if self.menu.is_some() {
            return Err(MenuError::AlreadyBound(self.id.clone()));
        }
        self.menu = Some(menu);
        Ok(())
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selection flag and fire `onselect`
    pub fn select(&mut self, selected: bool) {
        self.selected = selected;
        if let Some(callback) = &self.onselect {
            callback(selected, &self.id);
        }
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    pub fn style(&self) -> Option<&WidgetStyle> {
        self.style.as_ref()
    }

    pub fn apply_style(&mut self, bundle: AttributeBundle) {
        self.style = Some(bundle.into());
    }

    pub fn controls(&self) -> Option<&InputControls> {
        self.controls.as_ref()
    }

    pub fn set_controls(&mut self, controls: InputControls) {
        self.controls = Some(controls);
    }

    pub fn set_onselect(&mut self, callback: Option<SelectCallback>) {
        self.onselect = callback;
    }

    fn keyboard_enabled(&self) -> bool {
        self.controls
            .as_ref()
            .map_or(true, |controls| controls.keyboard.is_enabled())
    }
}

pub struct Widget {
    base: WidgetBase,
    kind: WidgetKind,
}

impl Widget {
    /// A widget of `kind`; selectable unless the kind has no interaction
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: WidgetKind) -> Self {
        let mut base = WidgetBase::new(id, title);
        base.set_selectable(kind.selectable_by_default());
        Self { base, kind }
    }

    /// Wrap a caller-defined widget kind
    pub fn custom(id: impl Into<String>, title: impl Into<String>, widget: impl CustomWidget + 'static) -> Self {
        Self::new(id, title, WidgetKind::Custom(Box::new(widget)))
    }

    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    pub fn id(&self) -> &str {
        self.base.id()
    }

    pub fn title(&self) -> &str {
        self.base.title()
    }

    pub fn menu(&self) -> Option<MenuId> {
        self.base.menu()
    }

    pub fn is_selectable(&self) -> bool {
        self.base.is_selectable()
    }

    pub fn is_selected(&self) -> bool {
        self.base.is_selected()
    }

    pub fn style(&self) -> Option<&WidgetStyle> {
        self.base.style()
    }

    /// Submenu this widget opens when applied
    pub fn opens_submenu(&self) -> Option<MenuId> {
        match &self.kind {
            WidgetKind::Button(button) => button.opens_submenu(),
            _ => None,
        }
    }

    /// Feed a key event; ignored when the keyboard device is off
    pub fn handle_key(&mut self, key: &Key) -> WidgetResponse {
        if !self.base.keyboard_enabled() || self.base.readonly {
            return WidgetResponse::Ignored;
        }
        self.dispatch_key(key)
    }

    /// Apply the widget as if return was pressed
    pub fn apply(&mut self) -> WidgetResponse {
        if self.base.readonly {
            return WidgetResponse::Ignored;
        }
        self.dispatch_key(&Key::Return)
    }

    fn dispatch_key(&mut self, key: &Key) -> WidgetResponse {
        let changed = match &mut self.kind {
            WidgetKind::Button(button) => {
                return match key {
                    Key::Return => WidgetResponse::Navigate(button.apply()),
                    _ => WidgetResponse::Ignored,
                };
            }
            WidgetKind::Selector(selector) => selector.handle_key(key),
            WidgetKind::ToggleSwitch(toggle) => toggle.handle_key(key),
            WidgetKind::TextInput(input) => input.handle_key(key),
            WidgetKind::ColorInput(input) => input.handle_key(key),
            WidgetKind::Custom(custom) => custom.handle_key(key),
            WidgetKind::Label | WidgetKind::Image(_) | WidgetKind::VMargin | WidgetKind::NoneWidget(_) => {
                false
            }
        };
        if changed {
            WidgetResponse::Updated
        } else {
            WidgetResponse::Ignored
        }
    }

    /// Value reported in the menu's input data, for value-bearing kinds
    pub fn value(&self) -> Option<Value> {
        match &self.kind {
            WidgetKind::Selector(selector) => selector.value(),
            WidgetKind::ToggleSwitch(toggle) => Some(toggle.state_value().clone()),
            WidgetKind::TextInput(input) => Some(input.value()),
            WidgetKind::ColorInput(input) => Some(input.value()),
            WidgetKind::Custom(custom) => custom.value(),
            _ => None,
        }
    }

    /// Width of the title in the widget's font; zero before styling
    pub fn title_width(&self, measurer: &dyn TextMeasurer) -> f32 {
        match self.style() {
            Some(style) => measurer.text_width(self.title(), &style.font.name, style.font.size),
            None => 0.0,
        }
    }

    /// Horizontal space the widget takes in its row, padding included.
    /// Inputs grow with their text; a color input also with its preview.
    pub fn row_width(&self, measurer: &dyn TextMeasurer) -> f32 {
        let Some(style) = self.style() else {
            return 0.0;
        };
        let text_width = |text: &str| measurer.text_width(text, &style.font.name, style.font.size);
        let content = match &self.kind {
            WidgetKind::VMargin | WidgetKind::NoneWidget(_) => return 0.0,
            WidgetKind::Image(image) => image.size().map_or(0.0, |(w, _)| w),
            WidgetKind::TextInput(input) => {
                text_width(self.title()) + text_width(&input.display_text())
            }
            WidgetKind::ColorInput(input) => {
                text_width(self.title())
                    + input.content_width(text_width(input.text()), style.font.size)
            }
            _ => text_width(self.title()),
        };
        content + style.padding.horizontal()
    }

    /// Vertical space the widget takes in the menu, margin included
    pub fn row_height(&self, measurer: &dyn TextMeasurer) -> f32 {
        let Some(style) = self.style() else {
            return 0.0;
        };
        let content = match &self.kind {
            WidgetKind::VMargin => return style.margin.y,
            WidgetKind::NoneWidget(_) => return 0.0,
            WidgetKind::Image(image) => image.size().map_or(0.0, |(_, h)| h),
            WidgetKind::Custom(custom) => custom.content_height(measurer, style),
            _ => measurer.line_height(style.font.size),
        };
        content + style.padding.vertical() + style.margin.y
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("id", &self.base.id)
            .field("title", &self.base.title)
            .field("kind", &self.kind.name())
            .field("menu", &self.base.menu)
            .field("selectable", &self.base.selectable)
            .field("selected", &self.base.selected)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MonospaceMeasurer;
    use carta_theme::Theme;
    use std::cell::RefCell;

    #[test]
    fn test_empty_id_becomes_uuid() {
        let a = Widget::new("", "a", WidgetKind::Label);
        let b = Widget::new("", "b", WidgetKind::Label);
        assert_eq!(a.id().len(), 36);
        assert_ne!(a.id(), b.id());
        assert_eq!(Widget::new("x", "c", WidgetKind::Label).id(), "x");
    }

    #[test]
    fn test_default_selectability() {
        assert!(Widget::new("", "", WidgetKind::Button(Button::new(ButtonAction::None))).is_selectable());
        assert!(!Widget::new("", "", WidgetKind::Label).is_selectable());
        assert!(!Widget::new("", "", WidgetKind::VMargin).is_selectable());
    }

    #[test]
    fn test_select_fires_callback() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut widget = Widget::new("w", "", WidgetKind::Label);
        widget
            .base_mut()
            .set_onselect(Some(Rc::new(move |selected, id: &str| {
                sink.borrow_mut().push((selected, id.to_string()));
            })));
        widget.base_mut().select(true);
        widget.base_mut().select(false);
        assert_eq!(
            *log.borrow(),
            vec![(true, "w".to_string()), (false, "w".to_string())]
        );
    }

    #[test]
    fn test_keyboard_switch_gates_keys() {
        let controls = InputControls::default();
        let mut widget = Widget::new("", "", WidgetKind::Button(Button::new(ButtonAction::Exit)));
        widget.base_mut().set_controls(controls.clone());

        assert_eq!(
            widget.handle_key(&Key::Return),
            WidgetResponse::Navigate(ButtonOutcome::Exit)
        );
        controls.keyboard.set_enabled(false);
        assert_eq!(widget.handle_key(&Key::Return), WidgetResponse::Ignored);
        assert_eq!(widget.apply(), WidgetResponse::Navigate(ButtonOutcome::Exit));
    }

    #[test]
    fn test_row_height_uses_style() {
        let measurer = MonospaceMeasurer::default();
        let mut widget = Widget::new("", "Play", WidgetKind::Label);
        assert_eq!(widget.row_height(&measurer), 0.0);

        let theme = Theme::default();
        let bundle = AttributeBundle::from_theme(&theme).unwrap();
        widget.base_mut().apply_style(bundle);
        let expected = measurer.line_height(theme.widget_font_size)
            + theme.widget_padding.vertical()
            + theme.widget_margin.y;
        assert_eq!(widget.row_height(&measurer), expected);
        assert!(widget.title_width(&measurer) > 0.0);
    }
}
