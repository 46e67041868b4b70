use super::error::{BackendError, Result};
use gl::{types::*, *};
use std::ffi::CStr;

pub fn check_gl_err() -> Result<()> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return Ok(());
    }
    Err(BackendError::Gl(err))
}

/// Draw-path variant of [`check_gl_err`]: drawing never fails the frame.
pub fn log_gl_err(context: &str) {
    if let Err(e) = check_gl_err() {
        log::error!("{context}: {e}");
    }
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn log_opengl_info() {
    log::info!(
        "OpenGL {} ({}, {})",
        gl_string(VERSION),
        gl_string(VENDOR),
        gl_string(RENDERER)
    );

    let mut mtu: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::debug!("MAX_TEXTURE_IMAGE_UNITS = {}", mtu);

    unsafe { gl::GetIntegerv(MAX_COMBINED_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::debug!("MAX_COMBINED_TEXTURE_IMAGE_UNITS = {}", mtu);
}

pub fn clear_screen(r: f32, g: f32, b: f32) {
    unsafe {
        gl::ClearColor(r, g, b, 1.0);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

/// Allocates `bytes` of uninitialized storage for a buffer rewritten every draw.
pub fn gl_buffer_data_arr_dyn(bytes: usize) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            bytes as isize,
            std::ptr::null(),
            DYNAMIC_DRAW,
        )
    };
}

pub fn gl_buffer_sub_data_arr<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferSubData(
            ARRAY_BUFFER,
            0,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
        )
    };
}

pub fn gl_buffer_data_element_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ELEMENT_ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

/// Uploads a single-channel 8-bit coverage bitmap (a rasterized glyph).
pub fn load_alpha_texture(width: usize, height: usize, data: &[u8]) -> Result<u32> {
    let params = [
        (TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_MIN_FILTER, LINEAR),
        (TEXTURE_2D, TEXTURE_MAG_FILTER, LINEAR),
    ];

    let mut texture = 0;
    unsafe { gl::GenTextures(1, &mut texture) };
    unsafe { gl::BindTexture(TEXTURE_2D, texture) };

    for (t, n, p) in params {
        unsafe { gl::TexParameteri(t, n, p as i32) };
    }

    // glyph rows are tightly packed, not 4-byte aligned
    unsafe { gl::PixelStorei(UNPACK_ALIGNMENT, 1) };

    let pixels = if data.is_empty() {
        std::ptr::null()
    } else {
        data.as_ptr().cast()
    };
    unsafe {
        gl::TexImage2D(
            TEXTURE_2D,
            0,
            RED as i32,
            width as i32,
            height as i32,
            0,
            RED,
            UNSIGNED_BYTE,
            pixels,
        )
    };
    check_gl_err()?;

    Ok(texture)
}
