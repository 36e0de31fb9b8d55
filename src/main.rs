use log::{error, info};
use std::process;

use stopengl::config::Settings;
use stopengl::error::AppError;
use stopengl::gl_api::misc;
use stopengl::gl_api::shader::simple_pipeline;
use stopengl::triangle::TriangleRenderer;
use stopengl::window::Window;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let settings = Settings::default();
    let mut window = Window::new(&settings)?;

    let info = misc::context_info()?;
    info!("OpenGL version {}", info.version);
    info!("max vertex attributes supported: {}", info.max_vertex_attribs);

    let size = window.size();
    misc::set_viewport(size.width, size.height)?;

    let program = simple_pipeline(settings.vertex_shader, settings.fragment_shader)?;
    let renderer = TriangleRenderer::new(program, &settings)?;
    misc::set_polygon_mode(settings.polygon_mode)?;

    // `renderer` is dropped before `window`, while the context is still alive.
    window.run(&renderer)
}
