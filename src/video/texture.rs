use crate::errors::*;
use crate::math::prelude::Vector2;

use super::{Device, TextureHandle};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureFormat {
    R8,
    RGB8,
    RGBA8,
}

impl TextureFormat {
    /// Bytes per pixel.
    pub fn size(self) -> usize {
        match self {
            TextureFormat::R8 => 1,
            TextureFormat::RGB8 => 3,
            TextureFormat::RGBA8 => 4,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextureParams {
    pub format: TextureFormat,
    pub wrap: TextureWrap,
    pub filter: TextureFilter,
    pub mipmap: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        TextureParams {
            format: TextureFormat::RGBA8,
            wrap: TextureWrap::Repeat,
            filter: TextureFilter::Linear,
            mipmap: true,
        }
    }
}

/// A 2D texture uploaded from already decoded pixels. Rows are expected
/// bottom-up, the way OpenGL samples them.
pub struct Texture {
    device: Device,
    handle: TextureHandle,
    params: TextureParams,
    dimensions: Vector2<u32>,
}

impl Texture {
    pub fn new(
        device: &Device,
        params: TextureParams,
        dimensions: Vector2<u32>,
        bytes: &[u8],
    ) -> Result<Self> {
        let expected = dimensions.x as usize * dimensions.y as usize * params.format.size();
        if dimensions.x == 0 || dimensions.y == 0 || bytes.len() != expected {
            return Err(Error::InvalidData(format!(
                "texture of {}x{} {:?} needs {} bytes, got {}",
                dimensions.x,
                dimensions.y,
                params.format,
                expected,
                bytes.len()
            )));
        }

        let handle = device.create_texture(params, dimensions, bytes)?;
        Ok(Texture {
            device: device.clone(),
            handle,
            params,
            dimensions,
        })
    }

    #[inline]
    pub fn handle(&self) -> TextureHandle {
        self.handle
    }

    #[inline]
    pub fn params(&self) -> TextureParams {
        self.params
    }

    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    /// Binds this texture to texture unit `unit`.
    pub fn bind(&self, unit: u32) -> Result<()> {
        self.device.bind_texture(unit, self.handle)
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        if let Err(err) = self.device.delete_texture(self.handle) {
            warn!("Failed to delete {}: {}", self.handle, err);
        }
    }
}
