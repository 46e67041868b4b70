use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("error while building OpenGL window: {0}")]
    Window(String),

    #[error("OpenGL context error: {0}")]
    GlContext(String),

    #[error("error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} shader compilation error: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("program link error: {0}")]
    ShaderLink(String),

    #[error("no shader program named '{0}'")]
    UnknownShader(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("OpenGL error: 0x{0:04x}")]
    Gl(u32),
}

pub type Result<T> = std::result::Result<T, BackendError>;
