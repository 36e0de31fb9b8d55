use crate::gl_api::error::GlResult;
use cgmath::{Vector2, Vector3, Vector4};

pub unsafe trait VertexAttribute {
    /// Issue the appropriate calls to `glVertexAttribPointer` based on the
    /// layout of this type, starting at attribute index `base_slot`. `offset`
    /// is the byte offset of this attribute inside one vertex and `stride` is
    /// the size of the whole vertex. Returns the number of attribute slots
    /// consumed.
    fn define_attribs(base_slot: u32, offset: u32, stride: i32) -> GlResult<u32>;
    const NUM_ATTRS: usize;
}

/// Declares a `#[repr(C)]` vertex struct whose fields are laid out as
/// consecutive, interleaved vertex attributes.
macro_rules! vertex {
    (vertex $name:ident {
        $($attrib:ident: $attrib_type:ty,)*
    }) => {
        #[derive(Copy, Clone, Debug, PartialEq)]
        #[repr(C)]
        pub struct $name {
            $(pub $attrib: $attrib_type),*
        }

        unsafe impl $crate::gl_api::layout::VertexAttribute for $name {
            fn define_attribs(base_slot: u32, offset: u32, stride: i32) -> $crate::gl_api::error::GlResult<u32> {
                let mut slot = base_slot;
                $(
                    let field_offset = offset + ::std::mem::offset_of!($name, $attrib) as u32;
                    slot += <$attrib_type as $crate::gl_api::layout::VertexAttribute>::define_attribs(slot, field_offset, stride)?;
                )*
                Ok(slot - base_slot)
            }

            const NUM_ATTRS: usize = 0 $(+ <$attrib_type as $crate::gl_api::layout::VertexAttribute>::NUM_ATTRS)*;
        }
    }
}

macro_rules! layout_simple {
    ($type:ty: $gl_type:ident $amount:expr) => {
        unsafe impl VertexAttribute for $type {
            fn define_attribs(slot: u32, offset: u32, stride: i32) -> GlResult<u32> {
                unsafe {
                    let offset = offset as usize as *const _;
                    gl_call!(VertexAttribPointer(
                        slot,
                        $amount,
                        ::gl::$gl_type,
                        ::gl::FALSE,
                        stride,
                        offset
                    ))?;
                    gl_call!(EnableVertexAttribArray(slot))?;
                    Ok(1)
                }
            }

            const NUM_ATTRS: usize = 1;
        }
    };
}

unsafe impl VertexAttribute for () {
    fn define_attribs(_slot: u32, _offset: u32, _stride: i32) -> GlResult<u32> { Ok(0) }
    const NUM_ATTRS: usize = 0;
}

layout_simple!(f32: FLOAT 1);
layout_simple!([f32; 2]: FLOAT 2);
layout_simple!([f32; 3]: FLOAT 3);
layout_simple!([f32; 4]: FLOAT 4);
layout_simple!(Vector2<f32>: FLOAT 2);
layout_simple!(Vector3<f32>: FLOAT 3);
layout_simple!(Vector4<f32>: FLOAT 4);
