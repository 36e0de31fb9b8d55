use cgmath::Vector3;
use gl::types::*;

use crate::config::Settings;
use crate::gl_api::buffer::{ElementBuffer, UsageType, VertexBuffer};
use crate::gl_api::error::GlResult;
use crate::gl_api::misc;
use crate::gl_api::shader::program::Program;
use crate::gl_api::shader::ShaderResult;
use crate::gl_api::vertex_array::VertexArray;

vertex! {
    vertex Vertex {
        position: Vector3<f32>,
        color: Vector3<f32>,
    }
}

const fn vertex(position: [f32; 3], color: [f32; 3]) -> Vertex {
    Vertex {
        position: Vector3 { x: position[0], y: position[1], z: position[2] },
        color: Vector3 { x: color[0], y: color[1], z: color[2] },
    }
}

pub const VERTICES: [Vertex; 3] = [
    vertex([0.5, -0.5, 0.0], [1.0, 0.0, 0.0]),  // bottom right
    vertex([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0]), // bottom left
    vertex([0.0, 0.5, 0.0], [0.0, 0.0, 1.0]),   // top
];

pub const INDICES: [u32; 3] = [0, 1, 2];

/// Owns the GPU side of the triangle: the program and the vertex array with
/// its vertex and index buffers.
pub struct TriangleRenderer {
    program: Program,
    vao: VertexArray,
    vbo: VertexBuffer<Vertex>,
    ebo: ElementBuffer<u32>,
    clear_color: [f32; 4],
}

impl TriangleRenderer {
    pub fn new(program: Program, settings: &Settings) -> ShaderResult<Self> {
        let mut vao = VertexArray::new();
        let mut vbo = VertexBuffer::new();
        let mut ebo = ElementBuffer::new();

        // The element buffer binding is vertex array state, so the array has
        // to be bound before the index upload.
        vao.bind();
        vbo.upload(&VERTICES, UsageType::StaticDraw)?;
        ebo.upload(&INDICES, UsageType::StaticDraw)?;
        vao.add_buffer(&vbo)?;
        vao.set_elements(&ebo);
        VertexArray::unbind();

        let [r, g, b, a] = settings.tint;
        program.set_uniform_vec4("tint", r, g, b, a)?;

        Ok(TriangleRenderer {
            program,
            vao,
            vbo,
            ebo,
            clear_color: settings.clear_color,
        })
    }

    pub fn draw(&self) -> GlResult<()> {
        let [r, g, b, a] = self.clear_color;
        misc::clear_color(r, g, b, a)?;
        misc::clear()?;

        self.program.bind();
        self.vao.bind();
        unsafe {
            gl_call!(DrawElements(
                gl::TRIANGLES,
                self.ebo.len() as GLsizei,
                gl::UNSIGNED_INT,
                ::std::ptr::null()
            ))?;
        }
        VertexArray::unbind();
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vbo.len()
    }
}
