use backend::math::{Color, Vec2};
use backend::shape::Rect;
use backend::system::{RawInput, Scancode};
use confetti::button::ButtonVisual;
use confetti::canvas::Canvas;
use confetti::engine::{centered_x, BUTTON_LABEL, OVER_MESSAGE, START_MESSAGE};
use confetti::input::{Action, InputSnapshot, KeyBindings};
use confetti::screen::{Screen, SESSION_CONFETTI};
use confetti::Engine;

const W: f32 = 800.0;
const H: f32 = 600.0;

#[derive(Debug, Clone, PartialEq)]
enum Draw {
    Clear(Color),
    Rect(Rect),
    Text(String, Vec2, f32),
}

#[derive(Default)]
struct Recorder {
    draws: Vec<Draw>,
}

impl Canvas for Recorder {
    fn clear(&mut self, color: Color) {
        self.draws.push(Draw::Clear(color));
    }

    fn draw_rect(&mut self, rect: &Rect) {
        self.draws.push(Draw::Rect(*rect));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32, _color: Color) {
        self.draws.push(Draw::Text(text.to_string(), pos, scale));
    }
}

fn frame(engine: &mut Engine, input: &InputSnapshot) {
    engine.process_input(input);
    engine.update();
}

fn idle() -> InputSnapshot {
    InputSnapshot::default()
}

fn mouse(down: bool) -> InputSnapshot {
    InputSnapshot::default().with_mouse_down(down)
}

fn keys(pressed: &[Scancode]) -> InputSnapshot {
    let raw = RawInput {
        pressed: pressed.iter().copied().collect(),
        ..Default::default()
    };
    InputSnapshot::from_raw(&raw, &KeyBindings::default(), H)
}

fn playing() -> Engine {
    let mut engine = Engine::new(W, H, Some(7));
    frame(&mut engine, &InputSnapshot::with_actions(&[Action::Start]));
    assert_eq!(engine.screen(), Screen::Play);
    engine
}

fn release_edges(engine: &mut Engine, n: usize) {
    for _ in 0..n {
        frame(engine, &mouse(true));
        frame(engine, &mouse(false));
    }
}

#[test]
fn start_screen_waits_for_the_start_key() {
    let mut engine = Engine::new(W, H, Some(1));
    assert_eq!(engine.screen(), Screen::Start);

    frame(&mut engine, &idle());
    assert_eq!(engine.screen(), Screen::Start);

    frame(&mut engine, &keys(&[Scancode::A]));
    assert_eq!(engine.screen(), Screen::Start);

    frame(&mut engine, &keys(&[Scancode::S]));
    assert_eq!(engine.screen(), Screen::Play);
}

#[test]
fn clicks_on_the_start_screen_spawn_nothing() {
    let mut engine = Engine::new(W, H, Some(1));
    frame(&mut engine, &mouse(true));
    frame(&mut engine, &mouse(false));
    assert_eq!(engine.screen(), Screen::Start);
    assert!(engine.confetti().is_empty());
}

#[test]
fn press_then_release_spawns_once() {
    let mut engine = playing();
    frame(&mut engine, &mouse(true));
    assert_eq!(engine.confetti().len(), 0);
    frame(&mut engine, &mouse(false));
    assert_eq!(engine.confetti().len(), 1);
}

#[test]
fn holding_the_button_still_spawns_once() {
    let mut engine = playing();
    frame(&mut engine, &mouse(true));
    frame(&mut engine, &mouse(true));
    frame(&mut engine, &mouse(false));
    frame(&mut engine, &mouse(false));
    assert_eq!(engine.confetti().len(), 1);
}

#[test]
fn no_press_no_spawn() {
    let mut engine = playing();
    frame(&mut engine, &mouse(false));
    frame(&mut engine, &mouse(false));
    assert_eq!(engine.confetti().len(), 0);
}

#[test]
fn confirm_key_release_spawns_like_a_click() {
    let mut engine = playing();
    frame(&mut engine, &keys(&[Scancode::Return]));
    frame(&mut engine, &idle());
    assert_eq!(engine.confetti().len(), 1);
}

#[test]
fn hundredth_piece_ends_the_session() {
    let mut engine = playing();

    release_edges(&mut engine, SESSION_CONFETTI - 1);
    assert_eq!(engine.screen(), Screen::Play);
    assert_eq!(engine.confetti().len(), SESSION_CONFETTI - 1);

    release_edges(&mut engine, 1);
    assert_eq!(engine.screen(), Screen::Over);
    assert_eq!(engine.confetti().len(), SESSION_CONFETTI);

    let sides: Vec<f32> = engine.confetti().iter().map(|p| p.side()).collect();
    assert_eq!(sides.first(), Some(&1.0));
    assert_eq!(sides.last(), Some(&100.0));
    assert!(sides.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn over_screen_ignores_further_clicks_and_keys() {
    let mut engine = playing();
    release_edges(&mut engine, SESSION_CONFETTI);
    let pos = engine.button().pos();

    release_edges(&mut engine, 3);
    frame(&mut engine, &keys(&[Scancode::S, Scancode::Left]));
    assert_eq!(engine.screen(), Screen::Over);
    assert_eq!(engine.confetti().len(), SESSION_CONFETTI);
    assert_eq!(engine.button().pos(), pos);
}

#[test]
fn arrows_move_the_button_one_step_per_frame() {
    let mut engine = playing();
    let start = engine.button().pos();

    frame(&mut engine, &keys(&[Scancode::Right]));
    assert_eq!(engine.button().pos(), start + Vec2::new(1.0, 0.0));

    frame(&mut engine, &keys(&[Scancode::Up]));
    assert_eq!(engine.button().pos(), start + Vec2::new(1.0, 1.0));

    frame(&mut engine, &keys(&[Scancode::Left, Scancode::Down]));
    assert_eq!(engine.button().pos(), start);
}

#[test]
fn arrows_do_nothing_before_play() {
    let mut engine = Engine::new(W, H, Some(1));
    let start = engine.button().pos();
    frame(&mut engine, &keys(&[Scancode::Right, Scancode::Up]));
    assert_eq!(engine.button().pos(), start);
}

#[test]
fn button_never_leaves_the_window() {
    let mut engine = playing();
    for _ in 0..1000 {
        frame(&mut engine, &keys(&[Scancode::Right, Scancode::Up]));
    }
    assert_eq!(engine.button().pos(), Vec2::new(W, H));

    for _ in 0..1000 {
        frame(&mut engine, &keys(&[Scancode::Left, Scancode::Down]));
        let pos = engine.button().pos();
        assert!((0.0..=W).contains(&pos.x) && (0.0..=H).contains(&pos.y));
    }
    assert_eq!(engine.button().pos(), Vec2::new(0.0, 0.0));
}

#[test]
fn button_reacts_to_hover_and_press() {
    let mut engine = playing();
    let center = engine.button().pos();
    let away = Vec2::new(10.0, 10.0);

    frame(&mut engine, &idle().with_cursor(away));
    assert_eq!(engine.button().visual(), ButtonVisual::Resting);

    frame(&mut engine, &idle().with_cursor(center));
    assert_eq!(engine.button().visual(), ButtonVisual::Hovered);
    assert_eq!(engine.button().rect().color(), engine.button().hover_color());

    frame(&mut engine, &mouse(true).with_cursor(center));
    assert_eq!(engine.button().visual(), ButtonVisual::Pressed);
    assert_eq!(engine.button().rect().color(), engine.button().press_color());

    frame(&mut engine, &idle().with_cursor(away));
    assert_eq!(engine.button().visual(), ButtonVisual::Resting);
    assert_eq!(engine.button().rect().color(), Color::RED);
}

#[test]
fn escape_requests_close_without_changing_screen() {
    let mut engine = Engine::new(W, H, Some(1));
    assert!(!engine.should_close());
    frame(&mut engine, &keys(&[Scancode::Escape]));
    assert!(engine.should_close());
    assert_eq!(engine.screen(), Screen::Start);
}

#[test]
fn window_close_request_also_closes() {
    let mut engine = playing();
    let raw = RawInput {
        quit_requested: true,
        ..Default::default()
    };
    frame(
        &mut engine,
        &InputSnapshot::from_raw(&raw, &KeyBindings::default(), H),
    );
    assert!(engine.should_close());
}

#[test]
fn start_screen_draws_centered_prompt() {
    let engine = Engine::new(W, H, Some(1));
    let mut canvas = Recorder::default();
    engine.render(&mut canvas);
    assert_eq!(
        canvas.draws,
        vec![
            Draw::Clear(Color::BLACK),
            Draw::Text(START_MESSAGE.to_string(), Vec2::new(208.0, 300.0), 1.0),
        ]
    );
}

#[test]
fn play_screen_draws_confetti_then_button_then_label() {
    let mut engine = playing();
    release_edges(&mut engine, 3);

    let mut canvas = Recorder::default();
    engine.render(&mut canvas);

    let mut expected = vec![Draw::Clear(Color::BLACK)];
    expected.extend(engine.confetti().iter().map(|p| Draw::Rect(*p.rect())));
    expected.push(Draw::Rect(*engine.button().rect()));
    expected.push(Draw::Text(
        BUTTON_LABEL.to_string(),
        engine.button().pos() + Vec2::new(-30.0, -5.0),
        0.5,
    ));
    assert_eq!(canvas.draws, expected);
    assert_eq!(canvas.draws.len(), 6);
}

#[test]
fn over_screen_draws_only_the_win_message() {
    let mut engine = playing();
    release_edges(&mut engine, SESSION_CONFETTI);

    let mut canvas = Recorder::default();
    engine.render(&mut canvas);
    assert_eq!(
        canvas.draws,
        vec![
            Draw::Clear(Color::BLACK),
            Draw::Text(
                OVER_MESSAGE.to_string(),
                Vec2::new(centered_x(W, OVER_MESSAGE), H / 2.0),
                1.0
            ),
        ]
    );
}
