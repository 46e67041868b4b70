//! Glyph-per-texture text rendering.
//!
//! Printable ASCII is rasterized once with `fontdue` when the renderer is
//! created; each glyph becomes its own single-channel texture. Characters
//! outside that range are skipped when drawing.

use super::error::{BackendError, Result};
use super::glutils::*;
use super::math::*;
use super::shaders::Shaders;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const FIRST_GLYPH: u8 = 32;
const LAST_GLYPH: u8 = 126;

#[derive(Debug, Clone, Copy)]
struct Glyph {
    texture: u32,
    /// bitmap width, height in pixels
    size: (f32, f32),
    /// offset of the bitmap's bottom-left corner from the pen position
    bearing: (f32, f32),
    advance: f32,
}

pub struct TextRenderer {
    shader: Shaders,
    glyphs: HashMap<char, Glyph>,
    vao: u32,
    vbo: u32,
}

impl TextRenderer {
    /// Loads the font at `font_path` and rasterizes it at `px` pixels.
    ///
    /// The program is expected to expose `projection`, `textColor` and a
    /// `text` sampler.
    pub fn new(shader: Shaders, font_path: &Path, px: f32) -> Result<Self> {
        let bytes = fs::read(font_path).map_err(|source| BackendError::Io {
            path: font_path.to_path_buf(),
            source,
        })?;
        let font = fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default())
            .map_err(|e| BackendError::Font(format!("{font_path:?}: {e}")))?;

        let mut glyphs = HashMap::new();
        for ch in (FIRST_GLYPH..=LAST_GLYPH).map(char::from) {
            let (metrics, bitmap) = font.rasterize(ch, px);
            let texture = load_alpha_texture(metrics.width, metrics.height, &bitmap)?;
            glyphs.insert(
                ch,
                Glyph {
                    texture,
                    size: (metrics.width as f32, metrics.height as f32),
                    bearing: (metrics.xmin as f32, metrics.ymin as f32),
                    advance: metrics.advance_width,
                },
            );
        }
        unsafe { gl::BindTexture(gl::TEXTURE_2D, 0) };
        log::debug!("rasterized {} glyphs from {font_path:?} at {px}px", glyphs.len());

        let (mut vao, mut vbo) = (0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        }
        // one quad: 6 vertices of (x, y, u, v)
        gl_buffer_data_arr_dyn(6 * 4 * std::mem::size_of::<f32>());
        gl_vertex_attrib_ptr_enab(0, 4, 4, 0);
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }
        check_gl_err()?;

        shader.use_program().set_i32("text", 0);

        Ok(TextRenderer {
            shader,
            glyphs,
            vao,
            vbo,
        })
    }

    /// Draws `text` with its baseline starting at (`x`, `y`) in window space.
    pub fn render_text(&self, text: &str, x: f32, y: f32, scale: f32, color: Vec3) {
        self.shader.use_program().set_vec3("textColor", color);
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0);
            gl::BindVertexArray(self.vao);
        }

        let mut pen = x;
        for ch in text.chars() {
            let Some(glyph) = self.glyphs.get(&ch) else {
                continue;
            };
            let xpos = pen + glyph.bearing.0 * scale;
            let ypos = y + glyph.bearing.1 * scale;
            let w = glyph.size.0 * scale;
            let h = glyph.size.1 * scale;

            if w > 0.0 && h > 0.0 {
                // fontdue bitmaps are stored top row first
                #[rustfmt::skip]
                let vertices: [f32; 24] = [
                    xpos,     ypos + h, 0.0, 0.0,
                    xpos,     ypos,     0.0, 1.0,
                    xpos + w, ypos,     1.0, 1.0,

                    xpos,     ypos + h, 0.0, 0.0,
                    xpos + w, ypos,     1.0, 1.0,
                    xpos + w, ypos + h, 1.0, 0.0,
                ];
                unsafe {
                    gl::BindTexture(gl::TEXTURE_2D, glyph.texture);
                    gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
                }
                gl_buffer_sub_data_arr(&vertices);
                unsafe {
                    gl::BindBuffer(gl::ARRAY_BUFFER, 0);
                    gl::DrawArrays(gl::TRIANGLES, 0, 6);
                }
            }
            pen += glyph.advance * scale;
        }

        unsafe {
            gl::BindVertexArray(0);
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }
        log_gl_err("TextRenderer::render_text");
    }
}

impl Drop for TextRenderer {
    fn drop(&mut self) {
        unsafe {
            for glyph in self.glyphs.values() {
                gl::DeleteTextures(1, &glyph.texture);
            }
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
