use super::error::GlResult;
use gl::types::*;
use crate::gl_api::buffer::{ElementBuffer, VertexBuffer};
use crate::gl_api::layout::VertexAttribute;

#[derive(Debug)]
pub struct VertexArray {
    pub(crate) id: GLuint,
    index: usize,
    _marker: ::std::marker::PhantomData<*mut ()>,
}

impl VertexArray {
    pub fn new() -> Self {
        let mut id = 0;
        // UNWRAP: Can only fail if count is negative
        unsafe {
            gl_call!(GenVertexArrays(1, &mut id)).unwrap();
        }
        VertexArray {
            id,
            index: 0,
            _marker: ::std::marker::PhantomData,
        }
    }

    pub fn bind(&self) {
        // UNWRAP: our ID should always be valid
        unsafe {
            gl_call!(BindVertexArray(self.id)).unwrap();
        }
    }

    pub fn unbind() {
        // UNWRAP: zero is always a valid vertex array name
        unsafe {
            gl_call!(BindVertexArray(0)).unwrap();
        }
    }

    /// Binds `buffer` and describes its layout as the next free attribute
    /// slots of this vertex array.
    // NOTE: need explicit lifetimes here because the buffer needs to outlive
    // `self`
    pub fn add_buffer<'s, 'b: 's, T: VertexAttribute>(&'s mut self, buffer: &'b VertexBuffer<T>) -> GlResult<()> {
        self.bind();
        buffer.bind();

        let stride = ::std::mem::size_of::<T>() as i32;
        self.index += T::define_attribs(self.index as u32, 0, stride)? as usize;

        Ok(())
    }

    /// Records `buffer` as this vertex array's index buffer.
    pub fn set_elements<'s, 'b: 's>(&'s mut self, buffer: &'b ElementBuffer<u32>) {
        self.bind();
        buffer.bind();
    }

    /// Number of attribute slots defined so far.
    pub fn attribute_count(&self) -> usize {
        self.index
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            // UNWRAP: can only fail if count is negative
            gl_call!(DeleteVertexArrays(1, &self.id)).unwrap();
        }
    }
}
