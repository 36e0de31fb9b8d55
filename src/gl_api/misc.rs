use super::error::GlResult;
use gl::types::*;
use std::ffi::CStr;
use std::os::raw::c_char;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContextInfo {
    pub version: String,
    pub max_vertex_attribs: i32,
}

pub fn context_info() -> GlResult<ContextInfo> {
    unsafe {
        let version = gl_call!(GetString(gl::VERSION))?;
        let version = if version.is_null() {
            String::new()
        } else {
            CStr::from_ptr(version as *const c_char).to_string_lossy().into_owned()
        };

        let mut max_vertex_attribs = 0;
        gl_call!(GetIntegerv(gl::MAX_VERTEX_ATTRIBS, &mut max_vertex_attribs))?;

        Ok(ContextInfo { version, max_vertex_attribs })
    }
}

/// Sets the viewport, with the origin in the bottom left corner of the window.
pub fn set_viewport(width: u32, height: u32) -> GlResult<()> {
    unsafe { gl_call!(Viewport(0, 0, width as GLsizei, height as GLsizei)) }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum PolygonMode {
    Point = gl::POINT,
    /// Wireframe
    Line = gl::LINE,
    Fill = gl::FILL,
}

pub fn set_polygon_mode(mode: PolygonMode) -> GlResult<()> {
    unsafe { gl_call!(PolygonMode(gl::FRONT_AND_BACK, mode as GLenum)) }
}

pub fn clear_color(r: f32, g: f32, b: f32, a: f32) -> GlResult<()> {
    unsafe { gl_call!(ClearColor(r, g, b, a)) }
}

/// Clears the color and depth buffers of the current framebuffer.
pub fn clear() -> GlResult<()> {
    unsafe { gl_call!(Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT)) }
}
