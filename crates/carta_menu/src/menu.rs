//! Menu container
//!
//! A [`Menu`] owns its widgets in display order together with the
//! selection index, the set of used widget IDs, statistics and the cached
//! layout surface. Menus live in a [`MenuTree`](crate::tree::MenuTree) and
//! are addressed by [`MenuId`].

use std::rc::Rc;

use carta_core::{InputControls, Key};
use carta_theme::Theme;
use rustc_hash::FxHashSet;

use crate::error::{MenuError, Result};
use crate::measure::{MonospaceMeasurer, TextMeasurer};
use crate::tree::MenuId;
use crate::widget::{Widget, WidgetKind, WidgetResponse};

/// Settings for a new menu
#[derive(Clone)]
pub struct MenuConfig {
    pub title: String,
    pub theme: Rc<Theme>,
    pub width: f32,
    pub height: f32,
    pub controls: InputControls,
    pub measurer: Rc<dyn TextMeasurer>,
}

impl MenuConfig {
    pub fn new(title: impl Into<String>, theme: impl Into<Rc<Theme>>) -> Self {
        Self {
            title: title.into(),
            theme: theme.into(),
            width: 600.0,
            height: 400.0,
            controls: InputControls::default(),
            measurer: Rc::new(MonospaceMeasurer::default()),
        }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn controls(mut self, controls: InputControls) -> Self {
        self.controls = controls;
        self
    }

    pub fn measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Rc::new(measurer);
        self
    }
}

/// Counters kept by a menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuStats {
    pub added_widgets: usize,
    pub render_requests: usize,
}

/// One widget row of the laid out menu
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceRow {
    pub id: String,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Cached layout of the menu content
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub rows: Vec<SurfaceRow>,
}

pub struct Menu {
    id: MenuId,
    title: String,
    theme: Rc<Theme>,
    width: f32,
    height: f32,
    controls: InputControls,
    measurer: Rc<dyn TextMeasurer>,
    widgets: Vec<Widget>,
    selected: Option<usize>,
    used_ids: FxHashSet<String>,
    stats: MenuStats,
    submenus: Vec<MenuId>,
    surface: Option<Surface>,
}

impl Menu {
    pub(crate) fn new(id: MenuId, config: MenuConfig) -> Self {
        Self {
            id,
            title: config.title,
            theme: config.theme,
            width: config.width,
            height: config.height,
            controls: config.controls,
            measurer: config.measurer,
            widgets: Vec::new(),
            selected: None,
            used_ids: FxHashSet::default(),
            stats: MenuStats::default(),
            submenus: Vec::new(),
            surface: None,
        }
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn controls(&self) -> &InputControls {
        &self.controls
    }

    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// Width available to widget content
    pub fn inner_width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    pub fn widget_mut(&mut self, id: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id() == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_widget(&self) -> Option<&Widget> {
        self.selected.and_then(|i| self.widgets.get(i))
    }

    pub fn selected_widget_mut(&mut self) -> Option<&mut Widget> {
        self.selected.and_then(|i| self.widgets.get_mut(i))
    }

    pub fn stats(&self) -> MenuStats {
        self.stats
    }

    /// Menus linked from this menu's buttons
    pub fn submenus(&self) -> &[MenuId] {
        &self.submenus
    }

    pub(crate) fn add_submenu(&mut self, menu: MenuId) {
        if !self.submenus.contains(&menu) {
            self.submenus.push(menu);
        }
    }

    /// Fail if `id` is already used by a widget of this menu
    pub fn check_id_duplicated(&self, id: &str) -> Result<()> {
        if self.used_ids.contains(id) {
            return Err(MenuError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    /// Register a widget bound to this menu.
    ///
    /// The first selectable widget appended while nothing is selected
    /// becomes the selection.
    pub fn append_widget(&mut self, widget: Widget) -> Result<&mut Widget> {
        if widget.menu() != Some(self.id) {
            return Err(MenuError::ForeignWidget(widget.id().to_string()));
        }
        self.check_id_duplicated(widget.id())?;
        let index = self.push(widget);
        Ok(&mut self.widgets[index])
    }

    /// Register several widgets, all checked before any is added
    pub(crate) fn append_widgets(&mut self, widgets: Vec<Widget>) -> Result<&mut [Widget]> {
        let mut ids = FxHashSet::default();
        for widget in &widgets {
            if widget.menu() != Some(self.id) {
                return Err(MenuError::ForeignWidget(widget.id().to_string()));
            }
            self.check_id_duplicated(widget.id())?;
            if !ids.insert(widget.id()) {
                return Err(MenuError::DuplicateId(widget.id().to_string()));
            }
        }
        let start = self.widgets.len();
        for widget in widgets {
            self.push(widget);
        }
        Ok(&mut self.widgets[start..])
    }

    fn push(&mut self, mut widget: Widget) -> usize {
        let index = self.widgets.len();
        if self.selected.is_none() && widget.is_selectable() {
            widget.base_mut().select(true);
            self.selected = Some(index);
        }
        tracing::debug!(
            id = %widget.id(),
            kind = widget.kind().name(),
            menu = %self.title,
            index,
            "widget added"
        );
        self.used_ids.insert(widget.id().to_string());
        self.widgets.push(widget);
        self.stats.added_widgets += 1;
        self.surface = None;
        self.request_render();
        index
    }

    /// Mark the menu for redraw
    pub fn request_render(&mut self) {
        self.stats.render_requests += 1;
    }

    /// Cached surface, if still valid
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Draw the menu: lay out the widgets if the cached surface was
    /// invalidated, then run the draw hooks of placeholder widgets
    pub fn render(&mut self) -> &Surface {
        let surface = match self.surface.take() {
            Some(surface) => surface,
            None => self.layout(),
        };
        for widget in &mut self.widgets {
            if let WidgetKind::NoneWidget(placeholder) = widget.kind_mut() {
                placeholder.draw();
            }
        }
        self.surface.insert(surface)
    }

    fn layout(&self) -> Surface {
        let measurer = self.measurer.as_ref();
        let mut y = 0.0;
        let rows = self
            .widgets
            .iter()
            .map(|widget| {
                let height = widget.row_height(measurer);
                let row = SurfaceRow {
                    id: widget.id().to_string(),
                    y,
                    width: widget.row_width(measurer),
                    height,
                };
                y += height;
                row
            })
            .collect();
        Surface {
            width: self.width,
            height: y,
            rows,
        }
    }

    /// Move the selection to the next selectable widget, wrapping around
    pub fn select_next(&mut self) -> bool {
        self.move_selection(true)
    }

    /// Move the selection to the previous selectable widget, wrapping around
    pub fn select_prev(&mut self) -> bool {
        self.move_selection(false)
    }

    fn move_selection(&mut self, forward: bool) -> bool {
        let len = self.widgets.len();
        if len == 0 {
            return false;
        }
        let start = match self.selected {
            Some(index) => index,
            None if forward => len - 1,
            None => 0,
        };
        let target = (1..=len)
            .map(|step| {
                if forward {
                    (start + step) % len
                } else {
                    (start + len - step % len) % len
                }
            })
            .find(|&index| self.widgets[index].is_selectable());

        let Some(target) = target else {
            return false;
        };
        if Some(target) == self.selected {
            return false;
        }
        if let Some(previous) = self.selected.and_then(|i| self.widgets.get_mut(i)) {
            previous.base_mut().select(false);
        }
        self.widgets[target].base_mut().select(true);
        self.selected = Some(target);
        self.surface = None;
        self.request_render();
        true
    }

    /// Navigate with up/down; other keys go to the selected widget
    pub fn handle_key(&mut self, key: &Key) -> WidgetResponse {
        if !self.controls.keyboard.is_enabled() {
            return WidgetResponse::Ignored;
        }
        let moved = match key {
            Key::Up => Some(self.select_prev()),
            Key::Down => Some(self.select_next()),
            _ => None,
        };
        if let Some(moved) = moved {
            return if moved {
                WidgetResponse::Updated
            } else {
                WidgetResponse::Ignored
            };
        }

        let response = match self.selected_widget_mut() {
            Some(widget) => widget.handle_key(key),
            None => WidgetResponse::Ignored,
        };
        if response == WidgetResponse::Updated {
            self.surface = None;
            self.request_render();
        }
        response
    }
}
