#[macro_use]
pub mod error;
#[macro_use]
pub mod layout;

pub mod buffer;
pub mod misc;
pub mod shader;
pub mod uniform;
pub mod vertex_array;
