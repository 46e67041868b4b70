use backend::math::{Color, Vec2};
use backend::shape::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_SIDE: f32 = 1.0;
pub const MAX_SIDE: f32 = 100.0;

/// A single piece of confetti. Never moves or changes color.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    rect: Rect,
}

impl Particle {
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn side(&self) -> f32 {
        self.rect.size().x
    }
}

/// Side length of the `index`-th piece (0-based): 1, 2, ... capped at 100.
pub fn side_for(index: usize) -> f32 {
    (MIN_SIDE + index as f32).min(MAX_SIDE)
}

/// Append-only confetti collection; insertion order is draw order.
pub struct Confetti {
    pieces: Vec<Particle>,
    rng: StdRng,
    area: Vec2,
}

impl Confetti {
    /// Confetti scattered over `[0, area.x) x [0, area.y)`, seeded from the OS.
    pub fn new(area: Vec2) -> Self {
        Self::with_rng(area, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(area: Vec2, seed: u64) -> Self {
        Self::with_rng(area, StdRng::seed_from_u64(seed))
    }

    fn with_rng(area: Vec2, rng: StdRng) -> Self {
        Confetti {
            pieces: Vec::new(),
            rng,
            area,
        }
    }

    /// Appends exactly one piece. The count is not capped here.
    pub fn spawn(&mut self) -> &Particle {
        let side = side_for(self.pieces.len());
        let pos = Vec2::new(
            self.rng.random_range(0.0..self.area.x),
            self.rng.random_range(0.0..self.area.y),
        );
        let color = Color::rgba(
            self.rng.random_range(0.0..=1.0),
            self.rng.random_range(0.0..=1.0),
            self.rng.random_range(0.0..=1.0),
            1.0,
        );
        self.pieces.push(Particle {
            rect: Rect::new(pos, Vec2::new(side, side), color),
        });
        log::debug!(
            "confetti #{} at ({:.0}, {:.0}), side {side}",
            self.pieces.len(),
            pos.x,
            pos.y
        );
        &self.pieces[self.pieces.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.pieces.iter()
    }
}
