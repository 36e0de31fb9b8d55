//! Compile and link status checks.
//!
//! Shaders and programs report failure the same way: a boolean status query
//! followed by an info log of driver-defined length. Only the entry points and
//! the status enum differ, so both go through [`check_status`].

use gl::types::*;
use thiserror::Error;

use super::ShaderError;
use crate::gl_api::error::GlError;

/// A failed compile or link, with the driver's info log.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{tag}: {log}")]
pub struct StatusError {
    pub tag: String,
    pub log: String,
}

/// The driver entry points used to query one kind of object.
pub(crate) struct StatusQuery {
    pub status: GLenum,
    pub get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
    pub get_info_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
    pub failure: fn(StatusError) -> ShaderError,
}

pub(crate) const COMPILE_STATUS: StatusQuery = StatusQuery {
    status: gl::COMPILE_STATUS,
    get_iv: gl::GetShaderiv,
    get_info_log: gl::GetShaderInfoLog,
    failure: ShaderError::Compile,
};

pub(crate) const LINK_STATUS: StatusQuery = StatusQuery {
    status: gl::LINK_STATUS,
    get_iv: gl::GetProgramiv,
    get_info_log: gl::GetProgramInfoLog,
    failure: ShaderError::Link,
};

/// Checks the status `query` describes for object `id`. On failure the whole
/// info log is fetched and returned under `tag`.
pub(crate) fn check_status(id: GLuint, query: &StatusQuery, tag: &str) -> Result<(), ShaderError> {
    let mut status = GLint::from(gl::FALSE);
    unsafe {
        GlError::map_value((query.get_iv)(id, query.status, &mut status))?;
    }

    if status != GLint::from(gl::FALSE) {
        return Ok(());
    }

    let log = info_log(id, query)?;
    Err((query.failure)(StatusError { tag: tag.to_owned(), log }))
}

fn info_log(id: GLuint, query: &StatusQuery) -> Result<String, GlError> {
    let mut length = 0;
    unsafe {
        GlError::map_value((query.get_iv)(id, gl::INFO_LOG_LENGTH, &mut length))?;
    }
    if length <= 0 {
        return Ok(String::new());
    }

    let mut buffer = vec![0u8; length as usize];
    unsafe {
        GlError::map_value((query.get_info_log)(
            id,
            length,
            ::std::ptr::null_mut(),
            buffer.as_mut_ptr() as *mut GLchar,
        ))?;
    }

    if let Some(nul) = buffer.iter().position(|&byte| byte == 0) {
        buffer.truncate(nul);
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
