//! Two-state toggle switch

use carta_core::{Color, Key};
use serde_json::Value;

use crate::options::Extras;

/// `(state value, extras)`
pub type ToggleCallback = Box<dyn FnMut(&Value, &Extras)>;

/// Drawing parameters of the switch box
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchAppearance {
    /// Box color for each state
    pub state_color: (Color, Color),
    pub state_text_font_color: (Color, Color),
    /// Falls back to the widget font size
    pub state_text_font_size: Option<u32>,
    pub slider_color: Color,
    pub slider_thickness: u32,
    pub switch_border_color: Color,
    pub switch_border_width: u32,
    /// Factor of the title font height
    pub switch_height: f32,
    /// x in px, y relative to the title height
    pub switch_margin: (f32, f32),
    pub width: u32,
}

impl Default for SwitchAppearance {
    fn default() -> Self {
        Self {
            state_color: (Color::from_rgb8(178, 178, 178), Color::from_rgb8(117, 185, 54)),
            state_text_font_color: (Color::WHITE, Color::WHITE),
            state_text_font_size: None,
            slider_color: Color::WHITE,
            slider_thickness: 20,
            switch_border_color: Color::from_rgb8(40, 40, 40),
            switch_border_width: 1,
            switch_height: 1.25,
            switch_margin: (25.0, 0.0),
            width: 150,
        }
    }
}

pub struct ToggleSwitch {
    state: usize,
    state_text: [String; 2],
    state_values: [Value; 2],
    infinite: bool,
    appearance: SwitchAppearance,
    onchange: Option<ToggleCallback>,
    extras: Extras,
}

impl ToggleSwitch {
    pub(crate) fn new(
        state: usize,
        state_text: [String; 2],
        state_values: [Value; 2],
        infinite: bool,
        appearance: SwitchAppearance,
    ) -> Self {
        Self {
            state: state.min(1),
            state_text,
            state_values,
            infinite,
            appearance,
            onchange: None,
            extras: Extras::new(),
        }
    }

    pub(crate) fn with_onchange(mut self, onchange: Option<ToggleCallback>, extras: Extras) -> Self {
        self.onchange = onchange;
        self.extras = extras;
        self
    }

    pub fn state(&self) -> usize {
        self.state
    }

    pub fn state_text(&self) -> &str {
        &self.state_text[self.state]
    }

    pub fn state_value(&self) -> &Value {
        &self.state_values[self.state]
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn appearance(&self) -> &SwitchAppearance {
        &self.appearance
    }

    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Move toward state 0; returns whether the state changed
    pub fn left(&mut self) -> bool {
        if self.state == 0 && !self.infinite {
            return false;
        }
        self.set_state((self.state + 1) % 2)
    }

    /// Move toward state 1; returns whether the state changed
    pub fn right(&mut self) -> bool {
        if self.state == 1 && !self.infinite {
            return false;
        }
        self.set_state((self.state + 1) % 2)
    }

    /// Flip the state
    pub fn toggle(&mut self) -> bool {
        self.set_state((self.state + 1) % 2)
    }

    pub(crate) fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Left => self.left(),
            Key::Right => self.right(),
            Key::Return => self.toggle(),
            _ => false,
        }
    }

    fn set_state(&mut self, state: usize) -> bool {
        if state == self.state {
            return false;
        }
        self.state = state;
        if let Some(callback) = self.onchange.as_mut() {
            callback(&self.state_values[self.state], &self.extras);
        }
        true
    }
}
