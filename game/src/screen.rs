use std::fmt;

/// Number of confetti pieces that ends a session.
pub const SESSION_CONFETTI: usize = 100;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Start,
    Play,
    Over,
}

impl Screen {
    /// Next screen given this frame's start key and the confetti count.
    /// Transitions only go forward; `Over` is terminal.
    pub fn next(self, start_pressed: bool, confetti: usize) -> Screen {
        match self {
            Screen::Start if start_pressed => Screen::Play,
            Screen::Play if confetti >= SESSION_CONFETTI => Screen::Over,
            other => other,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Start => "start",
            Screen::Play => "play",
            Screen::Over => "over",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_waits_for_start_key() {
        assert_eq!(Screen::Start.next(false, 0), Screen::Start);
        assert_eq!(Screen::Start.next(true, 0), Screen::Play);
    }

    #[test]
    fn start_ignores_confetti_count() {
        assert_eq!(Screen::Start.next(false, SESSION_CONFETTI), Screen::Start);
    }

    #[test]
    fn play_ends_at_exactly_the_session_count() {
        assert_eq!(Screen::Play.next(false, SESSION_CONFETTI - 1), Screen::Play);
        assert_eq!(Screen::Play.next(false, SESSION_CONFETTI), Screen::Over);
    }

    #[test]
    fn play_never_goes_back_to_start() {
        assert_eq!(Screen::Play.next(true, 0), Screen::Play);
    }

    #[test]
    fn over_is_terminal() {
        assert_eq!(Screen::Over.next(true, 0), Screen::Over);
        assert_eq!(Screen::Over.next(false, SESSION_CONFETTI), Screen::Over);
    }
}
