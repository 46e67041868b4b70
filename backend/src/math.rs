use std::ops::{Add, Index, Sub};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vec4 { x, y, z, w }
    }
}

impl Add for Vec4 {
    type Output = Vec4;
    fn add(self, rhs: Vec4) -> Vec4 {
        Vec4::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Vec4 {
    type Output = Vec4;
    fn sub(self, rhs: Vec4) -> Vec4 {
        Vec4::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline(always)]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

/// RGBA color, components in [0, 1].
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Offsets r, g and b by `delta`, leaving alpha untouched.
    pub fn shifted(self, delta: f32) -> Color {
        let v = Vec4::from(self) + Vec4::new(delta, delta, delta, 0.0);
        Color::from(v)
    }

    pub fn rgb(&self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }
}

impl From<Color> for Vec4 {
    fn from(c: Color) -> Vec4 {
        Vec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Color {
        Color::rgba(v.x, v.y, v.z, v.w)
    }
}

/// Column-major 4x4 matrix, the layout `glUniformMatrix4fv` expects.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4x4 {
    pub c0: Vec4,
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
}

impl Mat4x4 {
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Mat4x4 {
            c0: Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 2.0 / (top - bottom), 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, -2.0 / (far - near), 0.0),
            c3: Vec4::new(
                -(right + left) / (right - left),
                -(top + bottom) / (top - bottom),
                -(far + near) / (far - near),
                1.0,
            ),
        }
    }

    /// Translation by `pos` combined with a scale by `size`, i.e. `T * S`.
    pub fn translate_scale(pos: Vec2, size: Vec2) -> Self {
        Mat4x4 {
            c0: Vec4::new(size.x, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, size.y, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, 1.0, 0.0),
            c3: Vec4::new(pos.x, pos.y, 0.0, 1.0),
        }
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        let (c0, c1, c2, c3) = (self.c0, self.c1, self.c2, self.c3);
        [
            c0[0], c0[1], c0[2], c0[3], c1[0], c1[1], c1[2], c1[3], c2[0], c2[1], c2[2], c2[3],
            c3[0], c3[1], c3[2], c3[3],
        ]
    }

    pub fn transform(&self, v: Vec4) -> Vec4 {
        let (c0, c1, c2, c3) = (self.c0, self.c1, self.c2, self.c3);
        Vec4::new(
            c0.x * v.x + c1.x * v.y + c2.x * v.z + c3.x * v.w,
            c0.y * v.x + c1.y * v.y + c2.y * v.z + c3.y * v.w,
            c0.z * v.x + c1.z * v.y + c2.z * v.z + c3.z * v.w,
            c0.w * v.x + c1.w * v.y + c2.w * v.z + c3.w * v.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ortho_maps_window_corners_to_clip_space() {
        let p = Mat4x4::ortho(0.0, 800.0, 0.0, 600.0, -1.0, 1.0);
        let bl = p.transform(Vec4::new(0.0, 0.0, 0.0, 1.0));
        let tr = p.transform(Vec4::new(800.0, 600.0, 0.0, 1.0));
        assert!((bl.x + 1.0).abs() < 1e-6 && (bl.y + 1.0).abs() < 1e-6);
        assert!((tr.x - 1.0).abs() < 1e-6 && (tr.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn translate_scale_places_unit_quad_corner() {
        let m = Mat4x4::translate_scale(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0));
        let v = m.transform(Vec4::new(0.5, 0.5, 0.0, 1.0));
        assert_eq!(v, Vec4::new(12.0, 21.0, 0.0, 1.0));
    }

    #[test]
    fn shifted_color_keeps_alpha() {
        let c = Color::RED.shifted(0.5);
        assert_eq!(c, Color::rgba(1.5, 0.5, 0.5, 1.0));
        let d = Color::RED.shifted(-0.5);
        assert_eq!(d, Color::rgba(0.5, -0.5, -0.5, 1.0));
    }

    #[test]
    fn column_major_layout() {
        let arr = Mat4x4::translate_scale(Vec2::new(7.0, 9.0), Vec2::new(1.0, 1.0)).to_cols_array();
        assert_eq!(arr[12], 7.0);
        assert_eq!(arr[13], 9.0);
        assert_eq!(arr[15], 1.0);
    }
}
