pub mod error;
pub mod glutils;
pub mod math;
pub mod shaders;
pub mod shape;
pub mod system;
pub mod text;

pub use error::BackendError;
