use std::ffi::NulError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::gl_api::error::GlError;

pub mod program;
pub mod shader;
pub mod status;

use self::program::*;
use self::shader::*;
use self::status::StatusError;

pub type ShaderResult<T> = Result<T, ShaderError>;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("could not read shader source `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Compile(StatusError),
    #[error(transparent)]
    Link(StatusError),
    #[error("a program needs at least one shader to link")]
    NoShaders,
    #[error("the driver could not create a {0} shader object")]
    Creation(ShaderType),
    #[error("the driver could not create a program object")]
    ProgramCreation,
    #[error(transparent)]
    Uniform(#[from] UniformError),
    #[error("string passed to the driver contains a NUL byte")]
    Nul(#[from] NulError),
    #[error(transparent)]
    Gl(#[from] GlError),
}

/// Compiles the vertex and fragment shader at the given paths and links them
/// into a program.
pub fn simple_pipeline<P1: AsRef<Path>, P2: AsRef<Path>>(vert: P1, frag: P2) -> ShaderResult<Program> {
    let vert_shader = Shader::from_file(vert, ShaderType::Vertex)?;
    let frag_shader = Shader::from_file(frag, ShaderType::Fragment)?;

    Program::link(vec![vert_shader, frag_shader])
}
