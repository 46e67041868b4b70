use super::error::{BackendError, Result};
use super::glutils::*;
use sdl2::event::Event;
pub use sdl2::keyboard::Scancode;
use sdl2::video::{GLProfile, SwapInterval};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub w: usize,
    pub h: usize,
    pub vsync: bool,
}

/// Raw device state sampled once per frame.
///
/// Cursor coordinates are in window space: origin top-left, y down.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub pressed: HashSet<Scancode>,
    pub cursor_x: i32,
    pub cursor_y: i32,
    pub left_button: bool,
    /// the window manager asked the window to close
    pub quit_requested: bool,
}

pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    event_pump: sdl2::EventPump,
}

impl System {
    pub fn new(settings: &WindowSettings) -> Result<System> {
        let (w, h) = (settings.w, settings.h);
        let sdl_context = sdl2::init().map_err(BackendError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_double_buffer(true);
        #[cfg(target_os = "macos")]
        gl_attr.set_context_flags().forward_compatible().set();

        // sdl2 windows are fixed-size unless `.resizable()` is requested
        let window = video_subsystem
            .window(&settings.title, w as u32, h as u32)
            .opengl()
            .position_centered()
            .build()
            .map_err(|e| BackendError::Window(e.to_string()))?;

        let gl_ctx = window
            .gl_create_context()
            .map_err(BackendError::GlContext)?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);
        if !gl::Viewport::is_loaded() {
            return Err(BackendError::GlContext(
                "failed to load OpenGL function pointers".to_string(),
            ));
        }

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        let interval = if settings.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("could not set swap interval (vsync={}): {e}", settings.vsync);
        }

        unsafe {
            gl::Viewport(0, 0, w as i32, h as i32);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }
        check_gl_err()?;
        log_opengl_info();

        let event_pump = sdl_context.event_pump().map_err(BackendError::Sdl)?;

        Ok(System {
            w,
            h,
            sdl_context,
            window,
            video_subsystem,
            gl_ctx,
            event_pump,
        })
    }

    /// Drains pending events and samples keyboard and mouse state.
    pub fn process_io_events(&mut self) -> RawInput {
        let mut quit_requested = false;
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                quit_requested = true;
            }
        }

        let pressed = self
            .event_pump
            .keyboard_state()
            .pressed_scancodes()
            .collect();
        let mouse = self.event_pump.mouse_state();

        RawInput {
            pressed,
            cursor_x: mouse.x(),
            cursor_y: mouse.y(),
            left_button: mouse.left(),
            quit_requested,
        }
    }

    /// Swaps buffers; with vsync enabled this paces the frame loop.
    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
    }
}
