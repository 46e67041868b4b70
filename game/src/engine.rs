//! The frame controller.
//!
//! Each frame the loop hands [`Engine::process_input`] a fresh
//! [`InputSnapshot`], calls [`Engine::update`], then [`Engine::render`]. The
//! engine owns the screen, the spawn button and the confetti; nothing here
//! touches the GL context directly.

use backend::math::{Color, Vec2};

use crate::button::{Button, ButtonVisual, MOVE_STEP};
use crate::canvas::Canvas;
use crate::input::{Action, InputSnapshot};
use crate::particles::Confetti;
use crate::screen::Screen;

pub const BACKGROUND: Color = Color::BLACK;
pub const TEXT_COLOR: Color = Color::WHITE;
pub const START_MESSAGE: &str = "Press s to start";
pub const OVER_MESSAGE: &str = "You win!";
pub const BUTTON_LABEL: &str = "Spawn";
/// Assumed glyph width at scale 1, used to center text.
pub const CHAR_WIDTH: f32 = 12.0;
const LABEL_OFFSET: Vec2 = Vec2::new(-30.0, -5.0);
const LABEL_SCALE: f32 = 0.5;

pub struct Engine {
    width: f32,
    height: f32,
    screen: Screen,
    button: Button,
    confetti: Confetti,
    pointer_was_down: bool,
    should_close: bool,
}

impl Engine {
    pub fn new(width: f32, height: f32, seed: Option<u64>) -> Self {
        let area = Vec2::new(width, height);
        let confetti = match seed {
            Some(seed) => Confetti::seeded(area, seed),
            None => Confetti::new(area),
        };
        Engine {
            width,
            height,
            screen: Screen::Start,
            button: Button::centered(width, height),
            confetti,
            pointer_was_down: false,
            should_close: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Applies one frame of input.
    pub fn process_input(&mut self, input: &InputSnapshot) {
        if input.wants_quit() {
            self.should_close = true;
        }

        if self.screen == Screen::Start {
            self.set_screen(self.screen.next(input.is_active(Action::Start), 0));
        }

        let pointer_down = input.pointer_down();
        if self.screen == Screen::Play {
            self.move_button(input);

            let over = self.button.contains(input.cursor);
            self.button
                .set_visual(ButtonVisual::from_pointer(over, pointer_down));

            if self.pointer_was_down && !pointer_down {
                self.confetti.spawn();
            }
        }

        self.pointer_was_down = pointer_down;
    }

    fn move_button(&mut self, input: &InputSnapshot) {
        let steps = [
            (Action::MoveUp, Vec2::new(0.0, MOVE_STEP)),
            (Action::MoveDown, Vec2::new(0.0, -MOVE_STEP)),
            (Action::MoveLeft, Vec2::new(-MOVE_STEP, 0.0)),
            (Action::MoveRight, Vec2::new(MOVE_STEP, 0.0)),
        ];
        let bounds = Vec2::new(self.width, self.height);
        for (action, delta) in steps {
            if input.is_active(action) {
                self.button.nudge(delta, bounds);
            }
        }
    }

    pub fn update(&mut self) {
        if self.screen == Screen::Play {
            self.set_screen(self.screen.next(false, self.confetti.len()));
        }
    }

    fn set_screen(&mut self, next: Screen) {
        if next == self.screen {
            return;
        }
        log::info!("screen {} -> {}", self.screen, next);
        if next == Screen::Over {
            log::info!("session finished with {} confetti", self.confetti.len());
        }
        self.screen = next;
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear(BACKGROUND);
        match self.screen {
            Screen::Start => self.draw_centered(canvas, START_MESSAGE),
            Screen::Play => {
                for piece in self.confetti.iter() {
                    canvas.draw_rect(piece.rect());
                }
                canvas.draw_rect(self.button.rect());
                canvas.draw_text(
                    BUTTON_LABEL,
                    self.button.pos() + LABEL_OFFSET,
                    LABEL_SCALE,
                    TEXT_COLOR,
                );
            }
            Screen::Over => self.draw_centered(canvas, OVER_MESSAGE),
        }
    }

    fn draw_centered(&self, canvas: &mut dyn Canvas, text: &str) {
        let pos = Vec2::new(centered_x(self.width, text), self.height / 2.0);
        canvas.draw_text(text, pos, 1.0, TEXT_COLOR);
    }
}

/// Left edge for `text` so it sits roughly centered in a `width` wide window.
pub fn centered_x(width: f32, text: &str) -> f32 {
    width / 2.0 - CHAR_WIDTH * text.chars().count() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_uses_twelve_pixels_per_char() {
        assert_eq!(centered_x(800.0, START_MESSAGE), 208.0);
        assert_eq!(centered_x(800.0, OVER_MESSAGE), 304.0);
        assert_eq!(centered_x(800.0, ""), 400.0);
    }

    #[test]
    fn new_engine_starts_idle() {
        let engine = Engine::new(800.0, 600.0, Some(0));
        assert_eq!(engine.screen(), Screen::Start);
        assert!(engine.confetti().is_empty());
        assert!(!engine.should_close());
        assert_eq!(engine.button().pos(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn update_alone_never_leaves_start() {
        let mut engine = Engine::new(800.0, 600.0, Some(0));
        for _ in 0..10 {
            engine.update();
        }
        assert_eq!(engine.screen(), Screen::Start);
    }
}
