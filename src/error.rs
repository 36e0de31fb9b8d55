use thiserror::Error;

use crate::gl_api::error::GlError;
use crate::gl_api::shader::ShaderError;

/// Everything that can stop the sample before or while it renders.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create the window: {0}")]
    Creation(#[from] glutin::CreationError),
    #[error("OpenGL context error: {0}")]
    Context(#[from] glutin::ContextError),
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Gl(#[from] GlError),
}
