use cgmath::{Matrix, Matrix4, Vector2, Vector3, Vector4};
use crate::gl_api::error::{GlError, GlResult};

pub type UniformLocation = ::gl::types::GLint;

/// Location returned by the driver for names that are not active uniforms.
/// Writes to it are silently ignored.
pub const UNKNOWN_LOCATION: UniformLocation = -1;

/// A typed handle to one uniform of a linked program.
pub struct Uniform<T: ?Sized> {
    pub(crate) location: UniformLocation,
    _marker: ::std::marker::PhantomData<T>,
}

impl<T: ?Sized> Uniform<T> {
    pub(crate) fn new(location: UniformLocation) -> Self {
        Uniform { location, _marker: ::std::marker::PhantomData }
    }

    pub fn location(&self) -> UniformLocation {
        self.location
    }

    /// Writes `value` into the currently bound program.
    pub fn set(&self, value: T) -> GlResult<()> where T: BoundUniform + Sized {
        value.set(self)
    }
}

pub trait BoundUniform {
    fn set(&self, uniform: &Uniform<Self>) -> GlResult<()>;
}

macro_rules! uniform {
    // Macro cleanliness means that we can't use `self` in the macro invocation scope
    // without first introducing it into scope there (slightly unfortunate)
    ($self:ident, $type:ty => $func:ident($($expr:expr),*)) => (
        impl BoundUniform for $type {
            #[inline(always)]
            fn set(&$self, uniform: &Uniform<Self>) -> GlResult<()> {
                unsafe { GlError::map_value(::gl::$func(uniform.location, $($expr),*)) }
            }
        }
    )
}

uniform!(self, f32 => Uniform1f(*self));
uniform!(self, [f32; 2] => Uniform2f(self[0], self[1]));
uniform!(self, [f32; 3] => Uniform3f(self[0], self[1], self[2]));
uniform!(self, [f32; 4] => Uniform4f(self[0], self[1], self[2], self[3]));
uniform!(self, Vector2<f32> => Uniform2f(self.x, self.y));
uniform!(self, Vector3<f32> => Uniform3f(self.x, self.y, self.z));
uniform!(self, Vector4<f32> => Uniform4f(self.x, self.y, self.z, self.w));

uniform!(self, i32 => Uniform1i(*self));
uniform!(self, Vector2<i32> => Uniform2i(self.x, self.y));
uniform!(self, Vector3<i32> => Uniform3i(self.x, self.y, self.z));
uniform!(self, Vector4<i32> => Uniform4i(self.x, self.y, self.z, self.w));

uniform!(self, u32 => Uniform1ui(*self));

uniform!(self, Matrix4<f32> => UniformMatrix4fv(1, ::gl::FALSE, self.as_ptr()));
