//! A minimal OpenGL sample: one window, one shader program, one triangle.
//!
//! [`gl_api`] wraps the raw `gl` bindings in owned types that delete their
//! objects on drop. The rest is the render driver built on top of it.

#[macro_use]
pub mod gl_api;
pub mod config;
pub mod error;
pub mod triangle;
pub mod window;
