use gl::types::GLenum;
use std::fmt;

pub type GlResult<T> = Result<T, GlError>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GlError {
    code: GLenum,
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OpenGL error {} (0x{:04X})", self.name(), self.code)
    }
}

impl ::std::error::Error for GlError {}

impl GlError {
    fn get_raw() -> GLenum { unsafe { gl::GetError() } }

    pub fn map_value<T>(val: T) -> GlResult<T> {
        match Self::get_raw() {
            0 => Ok(val),
            // GL specification states that it is undefined to issue any GL
            // calls after an out of memory error is received.
            gl::OUT_OF_MEMORY => ::std::process::abort(),
            code => Err(GlError { code }),
        }
    }

    pub fn code(&self) -> GLenum {
        self.code
    }

    pub fn name(&self) -> ErrorName {
        ErrorName(self.code)
    }
}

pub struct ErrorName(GLenum);

impl fmt::Display for ErrorName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self.0 {
            gl::INVALID_ENUM => "INVALID_ENUM",
            gl::INVALID_VALUE => "INVALID_VALUE",
            gl::INVALID_OPERATION => "INVALID_OPERATION",
            gl::INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION",
            gl::STACK_OVERFLOW => "STACK_OVERFLOW",
            gl::STACK_UNDERFLOW => "STACK_UNDERFLOW",
            _ => "UNKNOWN",
        };
        f.write_str(name)
    }
}

macro_rules! gl_call {
    ($name:ident($($args:expr),*)) => {{
        $crate::gl_api::error::GlError::map_value(::gl::$name($($args),*))
    }}
}
