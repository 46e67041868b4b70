use super::glutils::*;
use super::math::*;
use super::shaders::Shaders;

/// Axis-aligned rectangle centered on `pos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pos: Vec2,
    size: Vec2,
    color: Color,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2, color: Color) -> Self {
        Rect { pos, size, color }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn move_by(&mut self, delta: Vec2) {
        self.pos = self.pos + delta;
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Point-in-rectangle test, edges inclusive.
    pub fn is_overlapping(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    pub fn model(&self) -> Mat4x4 {
        Mat4x4::translate_scale(self.pos, self.size)
    }
}

/// Draws [`Rect`]s with one shared unit quad and the shape program.
///
/// The program is expected to expose `projection`, `model` and `color`
/// uniforms.
pub struct QuadRenderer {
    shader: Shaders,
    vao: u32,
    vbo: u32,
    ebo: u32,
}

impl QuadRenderer {
    pub fn new(shader: Shaders) -> Self {
        #[rustfmt::skip]
        let vertices: [f32; 8] = [
            -0.5, -0.5,
             0.5, -0.5,
             0.5,  0.5,
            -0.5,  0.5,
        ];
        let indices: [u32; 6] = [0, 1, 2, 2, 3, 0];

        let (mut vao, mut vbo, mut ebo) = (0, 0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::GenBuffers(1, &mut ebo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_stat(&vertices);
        unsafe { gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo) };
        gl_buffer_data_element_stat(&indices);
        gl_vertex_attrib_ptr_enab(0, 2, 2, 0);
        unsafe { gl::BindVertexArray(0) };
        log_gl_err("QuadRenderer::new");

        QuadRenderer {
            shader,
            vao,
            vbo,
            ebo,
        }
    }

    pub fn draw(&self, rect: &Rect) {
        self.shader.use_program();
        self.shader.set_mat4fv("model", &rect.model());
        self.shader.set_vec4("color", rect.color().into());
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(gl::TRIANGLES, 6, gl::UNSIGNED_INT, std::ptr::null());
            gl::BindVertexArray(0);
        }
        log_gl_err("QuadRenderer::draw");
    }
}

impl Drop for QuadRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.ebo);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
