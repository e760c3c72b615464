//! Carta Menu
//!
//! Theme-resolved widget factory and menu container.
//!
//! # Overview
//!
//! Widgets are built through a [`WidgetManager`] obtained from
//! [`MenuTree::add`]. Each factory routine takes the kind-specific
//! parameters plus a set of [`StyleOverrides`]; omitted style keys fall back
//! to the menu's [`Theme`](carta_theme::Theme). The resolved style is bound
//! onto the widget, which is then appended to the menu: the first
//! selectable widget becomes the selection, the ID is recorded and the
//! cached layout is invalidated.
//!
//! # Quick Start
//!
//! ```rust
//! use carta_menu::{MenuTree, StyleOverrides, TextInputParams, ToggleSwitchParams};
//! use carta_theme::ThemePreset;
//!
//! let mut tree = MenuTree::new();
//! let main = tree.new_menu("Settings", ThemePreset::Dark.theme());
//!
//! let mut add = tree.add(main)?;
//! add.text_input(
//!     "Name: ",
//!     TextInputParams {
//!         textinput_id: "name".into(),
//!         default: "Player".into(),
//!         style: StyleOverrides::new().font_size(20),
//!         ..Default::default()
//!     },
//! )?;
//! add.toggle_switch(
//!     "Sound",
//!     ToggleSwitchParams {
//!         toggle_id: "sound".into(),
//!         ..Default::default()
//!     },
//! )?;
//!
//! let data = tree.input_data(main, false)?;
//! assert_eq!(data["name"], "Player");
//! assert_eq!(data["sound"], false);
//! # Ok::<(), carta_menu::MenuError>(())
//! ```
//!
//! # Modules
//!
//! - [`attributes`]: style resolution against the theme
//! - [`manager`]: one construction routine per widget kind
//! - [`binder`]: one-shot widget to menu binding
//! - [`menu`] / [`tree`]: widget container, menu graph and navigation

pub mod attributes;
pub mod binder;
pub mod error;
pub mod manager;
pub mod measure;
pub mod menu;
pub mod options;
pub mod tree;
pub mod widget;
pub mod wrap;

pub use attributes::{ensure_consumed, resolve, AttributeBundle};
pub use error::{ErrorKind, MenuError, Result};
pub use manager::{
    ButtonParams, ColorInputParams, ImageParams, LabelParams, LabelWidgets, LabelWrap,
    SelectorParams, TextInputParams, ToggleSwitchParams, WidgetManager, WidgetRequest,
};
pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use menu::{Menu, MenuConfig, MenuStats, Surface, SurfaceRow};
pub use options::{Extras, StyleOverrides, STYLE_KEYS};
pub use tree::{MenuId, MenuTree};
pub use widget::{
    Button, ButtonAction, ButtonOutcome, ColorInput, ColorMode, ColorValue, CustomWidget,
    HexFormat, Image, InputType, NoneWidget, SelectCallback, Selector, SelectorItem, SwitchAppearance,
    TextInput, ToggleSwitch, Widget, WidgetBase, WidgetKind, WidgetResponse, WidgetStyle,
};
