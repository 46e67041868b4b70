pub mod button;
pub mod canvas;
pub mod config;
pub mod engine;
pub mod input;
pub mod logging;
pub mod particles;
pub mod screen;
pub mod timing;

pub use engine::Engine;
