use super::error::{BackendError, Result};
use super::glutils::*;
use super::math::*;
use gl::{types::*, *};
use std::collections::HashMap;
use std::ffi::CString;
use std::fs;
use std::path::Path;

/// Handle to a linked shader program. Owned by [`ShaderManager`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    pub fn from_files_full(
        vertex_file: &Path,
        fragment_file: &Path,
        geometry_file: Option<&Path>,
    ) -> Result<Shaders> {
        let vertex_code = read_source(vertex_file)?;
        let fragment_code = read_source(fragment_file)?;
        let geometry_code = match geometry_file {
            Some(path) => read_source(path)?,
            None => String::new(),
        };

        Shaders::from_str_full(&vertex_code, &fragment_code, &geometry_code)
    }

    pub fn from_str_full(
        vertex_code: &str,
        fragment_code: &str,
        geometry_code: &str,
    ) -> Result<Shaders> {
        let vertex_shader = Self::create(VERTEX_SHADER, "vertex", vertex_code)?;
        let fragment_shader = Self::create(FRAGMENT_SHADER, "fragment", fragment_code)?;

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };

        let mut geometry_shader = 0;
        if !geometry_code.is_empty() {
            geometry_shader = Self::create(GEOMETRY_SHADER, "geometry", geometry_code)?;
            unsafe { gl::AttachShader(shader_program, geometry_shader) };
        }

        unsafe { gl::LinkProgram(shader_program) };

        // not needed anymore, the program keeps them alive
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };
        if geometry_shader != 0 {
            unsafe { gl::DeleteShader(geometry_shader) };
        }

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let mut v: Vec<u8> = vec![0; 1024];
            let mut log_len = 0_i32;
            unsafe {
                gl::GetProgramInfoLog(shader_program, 1024, &mut log_len, v.as_mut_ptr().cast());
                gl::DeleteProgram(shader_program);
            }
            v.truncate(log_len.max(0) as usize);
            return Err(BackendError::ShaderLink(
                String::from_utf8_lossy(&v).into_owned(),
            ));
        }

        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn create(kind: GLenum, stage: &'static str, code: &str) -> Result<u32> {
        let shader_id = unsafe { gl::CreateShader(kind) };
        if shader_id == 0 {
            return Err(BackendError::ShaderCompile {
                stage,
                log: "glCreateShader failed".to_string(),
            });
        }
        if let Err(log) = Self::compile(shader_id, code) {
            unsafe { gl::DeleteShader(shader_id) };
            return Err(BackendError::ShaderCompile { stage, log });
        }
        Ok(shader_id)
    }

    fn compile(shader_id: u32, shader_code: &str) -> std::result::Result<(), String> {
        let len = shader_code.len() as i32;
        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &len,
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut v: Vec<u8> = vec![0; 1024];
            let mut log_len = 0_i32;
            unsafe {
                gl::GetShaderInfoLog(shader_id, 1024, &mut log_len, v.as_mut_ptr().cast());
            }
            v.truncate(log_len.max(0) as usize);
            return Err(String::from_utf8_lossy(&v).into_owned());
        }
        Ok(())
    }

    /// Returns `None` (and logs) when `name` is not an active uniform.
    fn get_uniform_location(&self, name: &str) -> Option<i32> {
        let Ok(c_name) = CString::new(name) else {
            log::warn!("uniform name '{name}' contains a NUL byte");
            return None;
        };
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        if location == -1 {
            log::warn!(
                "program({}): '{}' does not correspond to an active uniform variable",
                self.program_id,
                name
            );
            return None;
        }
        Some(location)
    }

    pub fn id(&self) -> u32 {
        self.program_id
    }

    pub fn use_program(&self) -> &Self {
        unsafe { gl::UseProgram(self.program_id) };
        log_gl_err("glUseProgram");
        self
    }

    pub fn set_i32(&self, name: &str, value: i32) {
        if let Some(location) = self.get_uniform_location(name) {
            unsafe { gl::Uniform1i(location, value) };
        }
    }

    pub fn set_vec3(&self, name: &str, v: Vec3) {
        if let Some(location) = self.get_uniform_location(name) {
            unsafe { gl::Uniform3f(location, v.x, v.y, v.z) };
        }
    }

    pub fn set_vec4(&self, name: &str, v: Vec4) {
        if let Some(location) = self.get_uniform_location(name) {
            unsafe { gl::Uniform4f(location, v.x, v.y, v.z, v.w) };
        }
    }

    pub fn set_mat4fv(&self, name: &str, mat: &Mat4x4) {
        if let Some(location) = self.get_uniform_location(name) {
            let arr = mat.to_cols_array();
            unsafe { gl::UniformMatrix4fv(location, 1, FALSE, arr.as_ptr()) };
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| BackendError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Named registry of shader programs. Deletes every program on drop.
#[derive(Default)]
pub struct ShaderManager {
    programs: HashMap<String, Shaders>,
}

impl ShaderManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles and links the program, replacing any previous one under `name`.
    pub fn load_shader(
        &mut self,
        vertex_file: &Path,
        fragment_file: &Path,
        geometry_file: Option<&Path>,
        name: &str,
    ) -> Result<Shaders> {
        let shaders = Shaders::from_files_full(vertex_file, fragment_file, geometry_file)?;
        log::debug!(
            "loaded shader '{name}' (program {}) from {vertex_file:?}, {fragment_file:?}",
            shaders.id()
        );
        if let Some(old) = self.programs.insert(name.to_string(), shaders) {
            unsafe { gl::DeleteProgram(old.program_id) };
        }
        Ok(shaders)
    }

    pub fn get_shader(&self, name: &str) -> Result<Shaders> {
        self.programs
            .get(name)
            .copied()
            .ok_or_else(|| BackendError::UnknownShader(name.to_string()))
    }
}

impl Drop for ShaderManager {
    fn drop(&mut self) {
        for shaders in self.programs.values() {
            unsafe { gl::DeleteProgram(shaders.program_id) };
        }
    }
}
