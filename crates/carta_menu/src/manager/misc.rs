use carta_core::ImageSource;

use crate::attributes::{ensure_consumed, AttributeBundle};
use crate::binder;
use crate::error::{MenuError, Result};
use crate::options::StyleOverrides;
use crate::widget::{Image, NoneWidget, SelectCallback, Widget, WidgetKind};

use super::{check_positive, WidgetManager};

/// Image parameters
pub struct ImageParams {
    pub image_id: String,
    /// Rotation in degrees; ignored for prebuilt resources
    pub angle: f32,
    /// Ignored for prebuilt resources
    pub scale: (f32, f32),
    pub scale_smooth: bool,
    pub selectable: bool,
    pub onselect: Option<SelectCallback>,
    /// Font and shadow keys are dropped
    pub style: StyleOverrides,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            image_id: String::new(),
            angle: 0.0,
            scale: (1.0, 1.0),
            scale_smooth: true,
            selectable: false,
            onselect: None,
            style: StyleOverrides::default(),
        }
    }
}

impl WidgetManager<'_> {
    /// Add an image
    pub fn image(&mut self, source: ImageSource, params: ImageParams) -> Result<&mut Widget> {
        let ImageParams {
            image_id,
            angle,
            scale,
            scale_smooth,
            selectable,
            onselect,
            mut style,
        } = params;

        if !angle.is_finite() {
            return Err(MenuError::validation("angle", "must be finite"));
        }
        check_positive("scale", scale.0)?;
        check_positive("scale", scale.1)?;

        style.discard_text_keys();
        let bundle = self.resolve(&mut style)?;
        ensure_consumed(&style)?;

        let image = Image::new(source, angle, scale, scale_smooth);
        let mut widget = Widget::new(image_id, "", WidgetKind::Image(image));
        widget.base_mut().set_selectable(selectable);
        widget.base_mut().set_onselect(onselect);
        self.configure(&mut widget, bundle)?;
        self.register(widget)
    }

    /// Add empty vertical space of `margin` px
    pub fn vertical_margin(&mut self, margin: f32, margin_id: impl Into<String>) -> Result<&mut Widget> {
        if !(margin.is_finite() && margin > 0.0) {
            return Err(MenuError::validation(
                "margin",
                "zero margin is not valid, prefer adding a none widget",
            ));
        }
        let mut style = StyleOverrides::new().margin(0.0, margin);
        let bundle = self.resolve(&mut style)?;

        let mut widget = Widget::new(margin_id, "", WidgetKind::VMargin);
        self.configure(&mut widget, bundle)?;
        self.register(widget)
    }

    /// Add a widget that draws nothing
    pub fn none_widget(&mut self, widget_id: impl Into<String>) -> Result<&mut Widget> {
        let bundle = AttributeBundle::from_theme(self.menu()?.theme())?;
        let mut widget = Widget::new(widget_id, "", WidgetKind::NoneWidget(NoneWidget::new()));
        self.configure(&mut widget, bundle)?;
        self.register(widget)
    }

    /// Add a widget built by the caller.
    ///
    /// The widget must not belong to a menu yet. A button opening a
    /// submenu is not linked into the menu graph this way. With
    /// `configure_defaults` the theme style is applied, otherwise the
    /// widget keeps its own.
    pub fn generic_widget(&mut self, mut widget: Widget, configure_defaults: bool) -> Result<&mut Widget> {
        if widget.menu().is_some() {
            return Err(MenuError::AlreadyBound(widget.id().to_string()));
        }
        if widget.opens_submenu().is_some() {
            tracing::warn!(
                id = %widget.id(),
                "submenu button added as a generic widget; the submenu is not linked to this menu, prefer button()"
            );
        }

        if configure_defaults {
            let bundle = AttributeBundle::from_theme(self.menu()?.theme())?;
            self.configure(&mut widget, bundle)?;
        } else {
            binder::attach(&mut widget, self.menu()?)?;
        }
        self.register(widget)
    }
}
