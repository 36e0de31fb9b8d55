use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use log::info;
use std::collections::HashSet;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

use crate::config::Settings;
use crate::error::AppError;
use crate::gl_api::error::GlResult;
use crate::gl_api::misc;
use crate::triangle::TriangleRenderer;

/// Keys currently held down, fed from keyboard events.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pressed: HashSet<VirtualKeyCode>,
}

impl InputState {
    pub fn handle_keyboard(&mut self, input: &KeyboardInput) {
        if let Some(key) = input.virtual_keycode {
            self.set(key, input.state);
        }
    }

    pub fn set(&mut self, key: VirtualKeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => self.pressed.insert(key),
            ElementState::Released => self.pressed.remove(&key),
        };
    }

    pub fn is_pressed(&self, key: VirtualKeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

/// Returns whether the window should close.
pub fn process_input(input: &InputState) -> bool {
    if input.is_pressed(VirtualKeyCode::Escape) {
        info!("escape pressed");
        return true;
    }
    false
}

/// Keeps the viewport covering the whole framebuffer.
pub fn on_resize(size: PhysicalSize<u32>) -> GlResult<()> {
    info!("resize width:{}, height:{}", size.width, size.height);
    misc::set_viewport(size.width, size.height)
}

pub struct Window {
    event_loop: EventLoop<()>,
    context: WindowedContext<PossiblyCurrent>,
}

impl Window {
    /// Opens the window, makes its context current on this thread and loads
    /// the GL entry points.
    pub fn new(settings: &Settings) -> Result<Window, AppError> {
        let event_loop = EventLoop::new();
        let builder = WindowBuilder::new()
            .with_title(settings.title)
            .with_inner_size(PhysicalSize::new(settings.width, settings.height))
            .with_resizable(false);
        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, settings.gl_version))
            .with_gl_profile(GlProfile::Core)
            .with_vsync(settings.vsync)
            .build_windowed(builder, &event_loop)?;
        info!("created window");

        let context = unsafe { context.make_current() }.map_err(|(_, err)| err)?;
        gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);

        Ok(Window { event_loop, context })
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.context.window().inner_size()
    }

    /// Renders frames until the window is closed or escape is pressed.
    pub fn run(&mut self, renderer: &TriangleRenderer) -> Result<(), AppError> {
        let context = &self.context;
        let mut input = InputState::default();
        let mut failure = None;

        self.event_loop.run_return(|event, _, control_flow| match event {
            Event::NewEvents(StartCause::Init) => *control_flow = ControlFlow::Poll,
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) => {
                    context.resize(size);
                    if let Err(err) = on_resize(size) {
                        failure = Some(AppError::from(err));
                        *control_flow = ControlFlow::Exit;
                    }
                }
                WindowEvent::KeyboardInput { input: key, .. } => input.handle_keyboard(&key),
                _ => (),
            },
            Event::MainEventsCleared => {
                if process_input(&input) {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                let frame = renderer
                    .draw()
                    .map_err(AppError::from)
                    .and_then(|()| context.swap_buffers().map_err(AppError::from));
                if let Err(err) = frame {
                    failure = Some(err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => (),
        });

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
