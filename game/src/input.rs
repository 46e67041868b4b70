//! Device state to logical actions.
//!
//! Game logic never sees scancodes: [`KeyBindings`] maps each [`Action`] to
//! the keys that trigger it, and [`InputSnapshot`] is what the engine
//! consumes every frame.

use backend::math::Vec2;
use backend::system::{RawInput, Scancode};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Start,
    /// keyboard equivalent of pressing the pointer button
    Confirm,
    Quit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Start,
        Action::Confirm,
        Action::Quit,
    ];
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<Action, Vec<Scancode>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = HashMap::from([
            (Action::MoveUp, vec![Scancode::Up]),
            (Action::MoveDown, vec![Scancode::Down]),
            (Action::MoveLeft, vec![Scancode::Left]),
            (Action::MoveRight, vec![Scancode::Right]),
            (Action::Start, vec![Scancode::S]),
            (Action::Confirm, vec![Scancode::Return, Scancode::Space]),
            (Action::Quit, vec![Scancode::Escape]),
        ]);
        KeyBindings { keys }
    }
}

impl KeyBindings {
    pub fn bind(&mut self, action: Action, keys: Vec<Scancode>) {
        self.keys.insert(action, keys);
    }

    pub fn keys(&self, action: Action) -> &[Scancode] {
        self.keys.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_active(&self, action: Action, pressed: &HashSet<Scancode>) -> bool {
        self.keys(action).iter().any(|k| pressed.contains(k))
    }
}

/// One frame of input in render space (origin bottom-left).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub actions: HashSet<Action>,
    pub cursor: Vec2,
    pub mouse_down: bool,
    pub quit_requested: bool,
}

impl InputSnapshot {
    pub fn from_raw(raw: &RawInput, bindings: &KeyBindings, window_height: f32) -> Self {
        let actions = Action::ALL
            .into_iter()
            .filter(|a| bindings.is_active(*a, &raw.pressed))
            .collect();
        InputSnapshot {
            actions,
            cursor: Vec2::new(raw.cursor_x as f32, window_height - raw.cursor_y as f32),
            mouse_down: raw.left_button,
            quit_requested: raw.quit_requested,
        }
    }

    pub fn with_actions(actions: &[Action]) -> Self {
        InputSnapshot {
            actions: actions.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn with_cursor(mut self, cursor: Vec2) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_mouse_down(mut self, down: bool) -> Self {
        self.mouse_down = down;
        self
    }

    pub fn is_active(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Pointer button or its keyboard equivalent.
    pub fn pointer_down(&self) -> bool {
        self.mouse_down || self.is_active(Action::Confirm)
    }

    pub fn wants_quit(&self) -> bool {
        self.quit_requested || self.is_active(Action::Quit)
    }
}
