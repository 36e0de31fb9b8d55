use gl::types::*;
use log::{debug, warn};
use std::ffi::CString;
use std::fmt;
use std::fs;
use std::path::Path;

use super::status::{check_status, COMPILE_STATUS};
use super::{ShaderError, ShaderResult};

const COMPILE_FAILURE: &str = "SHADER::COMPILE_FAILURE";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum ShaderType {
    Vertex = gl::VERTEX_SHADER,
    Fragment = gl::FRAGMENT_SHADER,
    Geometry = gl::GEOMETRY_SHADER,
    TessControl = gl::TESS_CONTROL_SHADER,
    TessEvaluation = gl::TESS_EVALUATION_SHADER,
    Compute = gl::COMPUTE_SHADER,
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ShaderType::Vertex => "vertex",
            ShaderType::Fragment => "fragment",
            ShaderType::Geometry => "geometry",
            ShaderType::TessControl => "tessellation control",
            ShaderType::TessEvaluation => "tessellation evaluation",
            ShaderType::Compute => "compute",
        })
    }
}

/// A successfully compiled shader object. The object is deleted on drop, or
/// together with the [`Program`](super::program::Program) it was linked into.
#[derive(Debug)]
pub struct Shader {
    pub(crate) id: GLuint,
    pub(crate) shader_type: ShaderType,
    _marker: ::std::marker::PhantomData<*mut ()>,
}

impl Shader {
    /// Compiles `source` as a shader of the given stage.
    pub fn compile(source: &str, shader_type: ShaderType) -> ShaderResult<Shader> {
        Shader::compile_tagged(source, shader_type, COMPILE_FAILURE)
    }

    /// Reads the whole file at `path` and compiles it. Compile failures are
    /// tagged with the path.
    pub fn from_file<P: AsRef<Path>>(path: P, shader_type: ShaderType) -> ShaderResult<Shader> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ShaderError::Io {
            path: path.to_owned(),
            source,
        })?;

        let tag = format!("{}::{}", COMPILE_FAILURE, path.display());
        Shader::compile_tagged(&source, shader_type, &tag)
    }

    fn compile_tagged(source: &str, shader_type: ShaderType, tag: &str) -> ShaderResult<Shader> {
        let source = CString::new(source)?;

        let id = unsafe { gl_call!(CreateShader(shader_type as GLenum))? };
        if id == 0 {
            return Err(ShaderError::Creation(shader_type));
        }
        // From here on dropping `shader` cleans up the object on failure.
        let shader = Shader::from_raw(id, shader_type);

        unsafe {
            gl_call!(ShaderSource(id, 1, &source.as_ptr(), ::std::ptr::null()))?;
            gl_call!(CompileShader(id))?;
        }
        check_status(id, &COMPILE_STATUS, tag)?;

        debug!("compiled {} shader {}", shader_type, id);
        Ok(shader)
    }

    pub(crate) fn from_raw(id: GLuint, shader_type: ShaderType) -> Self {
        Shader {
            id,
            shader_type,
            _marker: ::std::marker::PhantomData,
        }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn shader_type(&self) -> ShaderType {
        self.shader_type
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        if let Err(err) = unsafe { gl_call!(DeleteShader(self.id)) } {
            warn!("could not delete {} shader {}: {}", self.shader_type, self.id, err);
        }
    }
}
