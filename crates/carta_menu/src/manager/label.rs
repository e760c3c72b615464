use crate::attributes::{ensure_consumed, AttributeBundle};
use crate::error::Result;
use crate::options::StyleOverrides;
use crate::widget::{SelectCallback, Widget, WidgetKind};
use crate::wrap::wrap_text;

use super::{LabelWidgets, WidgetManager};

/// Line length limit of a label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelWrap {
    /// Never wrap
    #[default]
    None,
    /// Wrap lines longer than this many chars; 0 never wraps
    Chars(usize),
    /// Estimate the limit from the menu width
    MenuWidth,
}

/// Label parameters
#[derive(Default)]
pub struct LabelParams {
    /// Empty for a generated ID
    pub label_id: String,
    pub max_char: LabelWrap,
    pub selectable: bool,
    pub onselect: Option<SelectCallback>,
    pub style: StyleOverrides,
}

/// Settings every line of one label call shares
struct LineTemplate {
    bundle: AttributeBundle,
    selectable: bool,
    onselect: Option<SelectCallback>,
}

impl WidgetManager<'_> {
    /// Add a label.
    ///
    /// Text containing `'\n'` becomes one label per line, and text longer
    /// than the wrap limit is word wrapped into several labels. Split lines
    /// get IDs derived from the label ID: `id+1`, `id+2`, ... All lines are
    /// built before any is registered.
    pub fn label(&mut self, title: impl Into<String>, params: LabelParams) -> Result<LabelWidgets<'_>> {
        let LabelParams {
            label_id,
            max_char,
            selectable,
            onselect,
            mut style,
        } = params;
        let title = title.into();

        let bundle = self.resolve(&mut style)?;
        ensure_consumed(&style)?;

        let base_id = if label_id.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            label_id
        };
        let template = LineTemplate {
            bundle,
            selectable,
            onselect,
        };

        let mut leaves = Vec::new();
        self.build_label(&title, base_id.clone(), max_char, &template, &mut leaves)?;

        let menu = self.menu_mut()?;
        if leaves.len() == 1 && leaves[0].id() == base_id {
            let leaf = leaves.remove(0);
            return menu.append_widget(leaf).map(LabelWidgets::Single);
        }
        menu.append_widgets(leaves).map(LabelWidgets::Lines)
    }

    fn build_label(
        &self,
        title: &str,
        id: String,
        wrap: LabelWrap,
        template: &LineTemplate,
        leaves: &mut Vec<Widget>,
    ) -> Result<()> {
        if title.contains('\n') {
            for (i, line) in title.split('\n').enumerate() {
                self.build_label(line, format!("{id}+{}", i + 1), wrap, template, leaves)?;
            }
            return Ok(());
        }

        let limit = match wrap {
            LabelWrap::None | LabelWrap::Chars(0) => None,
            LabelWrap::Chars(n) => Some(n),
            LabelWrap::MenuWidth => self.menu_width_limit(title, &template.bundle)?,
        };

        self.menu()?.check_id_duplicated(&id)?;

        if let Some(limit) = limit.filter(|&limit| title.chars().count() > limit) {
            for (i, line) in wrap_text(title, limit).iter().enumerate() {
                self.build_label(
                    line,
                    format!("{id}+{}", i + 1),
                    LabelWrap::Chars(limit),
                    template,
                    leaves,
                )?;
            }
            return Ok(());
        }

        let mut widget = Widget::new(id, title, WidgetKind::Label);
        widget.base_mut().set_selectable(template.selectable);
        widget.base_mut().set_onselect(template.onselect.clone());
        self.configure(&mut widget, template.bundle.clone())?;
        leaves.push(widget);
        Ok(())
    }

    /// Chars that fit the menu width, measured on a throwaway label;
    /// `None` never wraps
    fn menu_width_limit(&self, title: &str, bundle: &AttributeBundle) -> Result<Option<usize>> {
        let menu = self.menu()?;
        let mut probe = Widget::new("probe", title, WidgetKind::Label);
        probe.base_mut().apply_style(bundle.clone());

        let width = probe.title_width(menu.measurer());
        if width <= 0.0 {
            return Ok(None);
        }
        let chars = title.chars().count() as f32;
        let limit = (menu.inner_width() * chars / width).floor() as usize;
        tracing::trace!(limit, "label wrap limit from menu width");
        // Not even one char fits, keep the line whole
        Ok((limit > 0).then_some(limit))
    }
}
