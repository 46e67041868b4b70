use backend::math::{Color, Vec2};
use backend::shape::Rect;

/// Pixels the button moves per frame while a direction is held.
pub const MOVE_STEP: f32 = 1.0;
pub const BUTTON_SIZE: Vec2 = Vec2::new(100.0, 50.0);

const HOVER_OFFSET: f32 = 0.5;
const PRESS_OFFSET: f32 = 0.5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisual {
    #[default]
    Resting,
    Hovered,
    Pressed,
}

impl ButtonVisual {
    /// Pressed wins over hovered. The pointer does not need to be over the
    /// button for the pressed look.
    pub fn from_pointer(over_button: bool, pointer_down: bool) -> Self {
        match (over_button, pointer_down) {
            (_, true) => ButtonVisual::Pressed,
            (true, false) => ButtonVisual::Hovered,
            (false, false) => ButtonVisual::Resting,
        }
    }
}

/// The spawn button: a rectangle with a rest color and two derived fills.
#[derive(Debug, Clone)]
pub struct Button {
    rect: Rect,
    base: Color,
    visual: ButtonVisual,
}

impl Button {
    pub fn new(pos: Vec2, size: Vec2, base: Color) -> Self {
        Button {
            rect: Rect::new(pos, size, base),
            base,
            visual: ButtonVisual::Resting,
        }
    }

    /// Red button centered in a `width` x `height` window.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(Vec2::new(width / 2.0, height / 2.0), BUTTON_SIZE, Color::RED)
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn pos(&self) -> Vec2 {
        self.rect.pos()
    }

    pub fn visual(&self) -> ButtonVisual {
        self.visual
    }

    pub fn hover_color(&self) -> Color {
        self.base.shifted(HOVER_OFFSET)
    }

    pub fn press_color(&self) -> Color {
        self.base.shifted(-PRESS_OFFSET)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.is_overlapping(point)
    }

    pub fn set_visual(&mut self, visual: ButtonVisual) {
        self.visual = visual;
        let fill = match visual {
            ButtonVisual::Resting => self.base,
            ButtonVisual::Hovered => self.hover_color(),
            ButtonVisual::Pressed => self.press_color(),
        };
        self.rect.set_color(fill);
    }

    /// Moves by `delta`, then clamps the center into `[0, bounds.x] x [0, bounds.y]`.
    pub fn nudge(&mut self, delta: Vec2, bounds: Vec2) {
        self.rect.move_by(delta);
        let pos = self.rect.pos();
        self.rect.set_pos(Vec2::new(
            pos.x.clamp(0.0, bounds.x),
            pos.y.clamp(0.0, bounds.y),
        ));
    }
}
