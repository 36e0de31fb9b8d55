use crate::gl_api::misc::PolygonMode;

/// Compiled-in settings for the sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL version, core profile.
    pub gl_version: (u8, u8),
    pub vsync: bool,
    pub clear_color: [f32; 4],
    pub polygon_mode: PolygonMode,
    /// Multiplied into every fragment color.
    pub tint: [f32; 4],
    pub vertex_shader: &'static str,
    pub fragment_shader: &'static str,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: "LearnOpenGL",
            width: 500,
            height: 500,
            gl_version: (3, 3),
            vsync: true,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            polygon_mode: PolygonMode::Fill,
            tint: [1.0, 1.0, 1.0, 1.0],
            vertex_shader: "shaders/basic.vert",
            fragment_shader: "shaders/basic.frag",
        }
    }
}
