use backend::error::Result;
use backend::glutils::clear_screen;
use backend::math::{Color, Mat4x4, Vec2};
use backend::shaders::ShaderManager;
use backend::shape::{QuadRenderer, Rect};
use backend::text::TextRenderer;

use crate::config::Config;

/// Draw target for one frame.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, rect: &Rect);
    /// `pos` is the left end of the text baseline.
    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32, color: Color);
}

/// OpenGL canvas: shape and text programs plus their renderers.
pub struct GlCanvas {
    quads: QuadRenderer,
    text: TextRenderer,
    // declared last: programs are deleted after the renderers using them
    _shaders: ShaderManager,
}

impl GlCanvas {
    /// Needs a current GL context.
    pub fn new(config: &Config) -> Result<Self> {
        let mut shaders = ShaderManager::new();
        shaders.load_shader(
            &config.shader_path("shape.vert"),
            &config.shader_path("shape.frag"),
            None,
            "shape",
        )?;
        shaders.load_shader(
            &config.shader_path("text.vert"),
            &config.shader_path("text.frag"),
            None,
            "text",
        )?;

        let projection = Mat4x4::ortho(
            0.0,
            config.width as f32,
            0.0,
            config.height as f32,
            -1.0,
            1.0,
        );
        let shape = shaders.get_shader("shape")?;
        shape.use_program().set_mat4fv("projection", &projection);
        let text = shaders.get_shader("text")?;
        text.use_program().set_mat4fv("projection", &projection);

        Ok(GlCanvas {
            quads: QuadRenderer::new(shape),
            text: TextRenderer::new(text, &config.font_path, config.font_size)?,
            _shaders: shaders,
        })
    }
}

impl Canvas for GlCanvas {
    fn clear(&mut self, color: Color) {
        clear_screen(color.r, color.g, color.b);
    }

    fn draw_rect(&mut self, rect: &Rect) {
        self.quads.draw(rect);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32, color: Color) {
        self.text.render_text(text, pos.x, pos.y, scale, color.rgb());
    }
}
