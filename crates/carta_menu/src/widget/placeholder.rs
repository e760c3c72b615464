//! Widgets without visual content

use serde_json::Value;

/// Called when the menu draws a [`NoneWidget`]
pub type DrawHook = Box<dyn FnMut(Option<&Value>)>;

/// Placeholder that draws nothing but can carry user data
#[derive(Default)]
pub struct NoneWidget {
    data: Option<Value>,
    draw_hook: Option<DrawHook>,
}

impl NoneWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn set_data(&mut self, data: Value) {
        self.data = Some(data);
    }

    pub fn set_draw_hook(&mut self, hook: impl FnMut(Option<&Value>) + 'static) {
        self.draw_hook = Some(Box::new(hook));
    }

    pub fn draw(&mut self) {
        if let Some(hook) = self.draw_hook.as_mut() {
            hook(self.data.as_ref());
        }
    }
}
