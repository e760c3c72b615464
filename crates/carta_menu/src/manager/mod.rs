//! Widget factory
//!
//! [`WidgetManager`] builds widgets for one menu. Every routine follows the
//! same steps: pull out its kind-specific parameters, resolve the style
//! overrides against the menu theme, construct the widget, bind it to the
//! menu and register it. Registration comes last, so a failing call leaves
//! the menu untouched.
//!
//! # Example
//!
//! ```rust
//! use carta_menu::{ButtonAction, ButtonParams, LabelParams, MenuTree};
//! use carta_theme::Theme;
//!
//! let mut tree = MenuTree::new();
//! let main = tree.new_menu("Main", Theme::default());
//! let settings = tree.new_menu("Settings", Theme::default());
//!
//! let mut add = tree.add(main).unwrap();
//! add.label("Welcome", LabelParams::default()).unwrap();
//! add.button("Settings", ButtonAction::OpenSubmenu(settings), ButtonParams::default())
//!     .unwrap();
//! add.button("Quit", ButtonAction::Exit, ButtonParams::default()).unwrap();
//!
//! assert_eq!(tree.menu(main).unwrap().len(), 3);
//! assert_eq!(tree.menu(main).unwrap().selected_index(), Some(1));
//! ```

mod button;
mod inputs;
mod label;
mod misc;

use carta_core::ImageSource;

use crate::attributes::{self, AttributeBundle};
use crate::binder;
use crate::error::{MenuError, Result};
use crate::menu::Menu;
use crate::options::StyleOverrides;
use crate::tree::{MenuId, MenuTree};
use crate::widget::{ButtonAction, ColorMode, SelectorItem, Widget};

pub use button::ButtonParams;
pub use inputs::{ColorInputParams, SelectorParams, TextInputParams, ToggleSwitchParams};
pub use label::{LabelParams, LabelWrap};
pub use misc::ImageParams;

/// Widget factory bound to one menu of a tree
pub struct WidgetManager<'a> {
    tree: &'a mut MenuTree,
    menu: MenuId,
}

/// One widget construction call, for table-driven menu building
pub enum WidgetRequest {
    Button {
        title: String,
        action: ButtonAction,
        params: ButtonParams,
    },
    ColorInput {
        title: String,
        mode: ColorMode,
        params: ColorInputParams,
    },
    Image {
        source: ImageSource,
        params: ImageParams,
    },
    Label {
        title: String,
        params: LabelParams,
    },
    Selector {
        title: String,
        items: Vec<SelectorItem>,
        params: SelectorParams,
    },
    ToggleSwitch {
        title: String,
        params: ToggleSwitchParams,
    },
    TextInput {
        title: String,
        params: TextInputParams,
    },
    VerticalMargin {
        margin: f32,
        margin_id: String,
    },
    NoneWidget {
        widget_id: String,
    },
    Generic {
        widget: Widget,
        configure_defaults: bool,
    },
}

/// Widgets added by one label call
#[derive(Debug)]
pub enum LabelWidgets<'a> {
    Single(&'a mut Widget),
    /// One widget per line
    Lines(&'a mut [Widget]),
}

impl<'a> LabelWidgets<'a> {
    pub fn as_slice(&self) -> &[Widget] {
        match self {
            Self::Single(widget) => std::slice::from_ref(&**widget),
            Self::Lines(widgets) => widgets,
        }
    }

    pub fn into_slice(self) -> &'a mut [Widget] {
        match self {
            Self::Single(widget) => std::slice::from_mut(widget),
            Self::Lines(widgets) => widgets,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.as_slice().iter().map(|w| w.id().to_string()).collect()
    }
}

impl<'a> WidgetManager<'a> {
    pub(crate) fn new(tree: &'a mut MenuTree, menu: MenuId) -> Self {
        Self { tree, menu }
    }

    /// The menu widgets are added to
    pub fn menu_id(&self) -> MenuId {
        self.menu
    }

    /// Build the widget a request describes; returns the IDs added
    pub fn add(&mut self, request: WidgetRequest) -> Result<Vec<String>> {
        fn one(widget: &mut Widget) -> Vec<String> {
            vec![widget.id().to_string()]
        }

        Ok(match request {
            WidgetRequest::Button {
                title,
                action,
                params,
            } => one(self.button(title, action, params)?),
            WidgetRequest::ColorInput {
                title,
                mode,
                params,
            } => one(self.color_input(title, mode, params)?),
            WidgetRequest::Image { source, params } => one(self.image(source, params)?),
            WidgetRequest::Label { title, params } => self.label(title, params)?.ids(),
            WidgetRequest::Selector {
                title,
                items,
                params,
            } => one(self.selector(title, items, params)?),
            WidgetRequest::ToggleSwitch { title, params } => one(self.toggle_switch(title, params)?),
            WidgetRequest::TextInput { title, params } => one(self.text_input(title, params)?),
            WidgetRequest::VerticalMargin { margin, margin_id } => {
                one(self.vertical_margin(margin, margin_id)?)
            }
            WidgetRequest::NoneWidget { widget_id } => one(self.none_widget(widget_id)?),
            WidgetRequest::Generic {
                widget,
                configure_defaults,
            } => one(self.generic_widget(widget, configure_defaults)?),
        })
    }

    fn menu(&self) -> Result<&Menu> {
        self.tree.menu(self.menu).ok_or(MenuError::UnknownMenu)
    }

    fn menu_mut(&mut self) -> Result<&mut Menu> {
        self.tree.menu_mut(self.menu).ok_or(MenuError::UnknownMenu)
    }

    fn resolve(&self, style: &mut StyleOverrides) -> Result<AttributeBundle> {
        attributes::resolve(style, self.menu()?.theme())
    }

    fn configure(&self, widget: &mut Widget, bundle: AttributeBundle) -> Result<()> {
        binder::bind(widget, bundle, self.menu()?)
    }

    fn register(&mut self, widget: Widget) -> Result<&mut Widget> {
        self.menu_mut()?.append_widget(widget)
    }
}

fn check_positive(param: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(MenuError::validation(
        param,
        format!("must be greater than zero, got {value}"),
    ))
}

fn check_non_negative(param: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(MenuError::validation(
        param,
        format!("must be equal or greater than zero, got {value}"),
    ))
}

/// Optional single-char parameter given as a string
fn single_char(param: &str, value: &str) -> Result<Option<char>> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(MenuError::validation(param, "must be a single character")),
    }
}
