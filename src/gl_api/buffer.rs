use super::error::GlResult;
use gl::types::*;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

pub trait BufferTarget: sealed::Sealed {
    const TARGET: GLenum;
}

macro_rules! buffer_target {
    ($name:ident : $enum:expr) => {
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
        pub struct $name;
        impl sealed::Sealed for $name {}
        impl BufferTarget for $name {
            const TARGET: GLenum = $enum;
        }
    };
}

buffer_target!(Array: gl::ARRAY_BUFFER);
buffer_target!(Element: gl::ELEMENT_ARRAY_BUFFER);

/// Usage type for buffers, provided as a performance hint. These values do not affect the behavior
/// of the buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum UsageType {
    /// Specified once by the application and drawn at most a few times.
    StreamDraw = gl::STREAM_DRAW,
    /// Specified once by the application and drawn many times.
    StaticDraw = gl::STATIC_DRAW,
    /// Respecified repeatedly by the application and drawn many times.
    DynamicDraw = gl::DYNAMIC_DRAW,
}

#[derive(Debug, Eq, PartialEq, Hash)]
pub struct Buffer<T, B: BufferTarget> {
    pub(crate) id: GLuint,
    length: usize,
    _phantom: PhantomData<(*mut T, B)>,
}

impl<T, B: BufferTarget> Buffer<T, B> {
    pub fn new() -> Self {
        let mut id = 0;
        // UNWRAP: Could only error if the amount is negative
        unsafe {
            gl_call!(GenBuffers(1, &mut id)).unwrap();
        }
        Buffer {
            id,
            length: 0,
            _phantom: PhantomData,
        }
    }

    pub fn bind(&self) {
        // UNWRAP: Could only error if the buffer type is invalid
        unsafe {
            gl_call!(BindBuffer(B::TARGET, self.id)).unwrap();
        }
    }

    /// Copies data from `data` to the gpu's memory
    pub fn upload(&mut self, data: &[T], usage_type: UsageType) -> GlResult<()> {
        unsafe {
            self.bind();
            self.length = data.len();
            // Could fail if OOM
            gl_call!(BufferData(
                B::TARGET,
                (::std::mem::size_of::<T>() * data.len()) as isize,
                data.as_ptr() as *const _,
                usage_type as GLenum
            ))
        }
    }

    /// Number of `T` elements last uploaded.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<T, B: BufferTarget> Drop for Buffer<T, B> {
    fn drop(&mut self) {
        unsafe {
            // UNWRAP: can only fail if count is negative, which it isn't
            gl_call!(DeleteBuffers(1, &self.id)).unwrap();
        }
    }
}

pub type VertexBuffer<T> = Buffer<T, Array>;
pub type ElementBuffer<T> = Buffer<T, Element>;
