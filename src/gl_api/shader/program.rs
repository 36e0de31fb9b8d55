use gl::types::*;
use log::{debug, warn};
use std::ffi::CString;
use thiserror::Error;

use super::shader::Shader;
use super::status::{check_status, LINK_STATUS};
use super::{ShaderError, ShaderResult};
use crate::gl_api::uniform::{BoundUniform, Uniform, UniformLocation, UNKNOWN_LOCATION};

const LINKING_FAILURE: &str = "PROGRAM::LINKING_FAILURE";

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum UniformError {
    #[error("`{0}` is not an active uniform of the program")]
    NameError(String),
}

/// A linked program together with the shaders it was linked from.
#[derive(Debug)]
pub struct Program {
    id: GLuint,
    shaders: Vec<Shader>,
    _marker: ::std::marker::PhantomData<*mut ()>,
}

impl Program {
    /// Attaches every shader in order and links them. On failure every
    /// object involved, the shaders included, is deleted.
    pub fn link(shaders: Vec<Shader>) -> ShaderResult<Program> {
        if shaders.is_empty() {
            return Err(ShaderError::NoShaders);
        }

        let id = unsafe { gl_call!(CreateProgram())? };
        if id == 0 {
            return Err(ShaderError::ProgramCreation);
        }
        let mut program = Program {
            id,
            shaders: Vec::with_capacity(shaders.len()),
            _marker: ::std::marker::PhantomData,
        };

        for shader in shaders {
            program.attach(shader)?;
        }

        unsafe {
            gl_call!(LinkProgram(id))?;
        }
        check_status(id, &LINK_STATUS, LINKING_FAILURE)?;

        debug!("linked program {} from {} shaders", id, program.shaders.len());
        Ok(program)
    }

    fn attach(&mut self, shader: Shader) -> ShaderResult<()> {
        unsafe {
            gl_call!(AttachShader(self.id, shader.id))?;
        }
        self.shaders.push(shader);
        Ok(())
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    /// The attached shaders, in attach order.
    pub fn shaders(&self) -> &[Shader] {
        &self.shaders
    }

    /// Makes this the program used by subsequent draw calls.
    pub fn bind(&self) {
        // UNWRAP: a linked program is always accepted by glUseProgram
        unsafe {
            gl_call!(UseProgram(self.id)).unwrap();
        }
    }

    fn uniform_location(&self, name: &str) -> ShaderResult<UniformLocation> {
        self.bind();
        let c_string = CString::new(name)?;
        let location = unsafe { gl_call!(GetUniformLocation(self.id, c_string.as_ptr()))? };
        Ok(location)
    }

    /// Looks up `name` and fails if it is not an active uniform.
    pub fn uniform<T: BoundUniform>(&self, name: &str) -> ShaderResult<Uniform<T>> {
        match self.uniform_location(name)? {
            UNKNOWN_LOCATION => Err(UniformError::NameError(name.to_owned()).into()),
            location => Ok(Uniform::new(location)),
        }
    }

    /// Binds the program and sets uniform `name`. Unknown names are ignored,
    /// the same as the driver does for location -1.
    pub fn set_uniform<T: BoundUniform>(&self, name: &str, value: T) -> ShaderResult<()> {
        let location = self.uniform_location(name)?;
        Uniform::<T>::new(location).set(value)?;
        Ok(())
    }

    pub fn set_uniform_vec4(&self, name: &str, x: f32, y: f32, z: f32, w: f32) -> ShaderResult<()> {
        self.set_uniform(name, [x, y, z, w])
    }

    /// Deletes the attached shaders, then the program.
    pub fn delete(self) {
        drop(self)
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.shaders.clear();
        if let Err(err) = unsafe { gl_call!(DeleteProgram(self.id)) } {
            warn!("could not delete program {}: {}", self.id, err);
        }
    }
}
