use crate::errors::*;

use super::{Device, VertexArrayId};

/// How consecutive vertices are assembled into primitives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
}

/// A float attribute bound to `layout (location = N)` in the vertex stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    /// Number of `f32` components, from 1 to 4.
    pub size: u8,
}

/// Describes how interleaved `f32` vertex data is split into attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    pub fn build() -> VertexLayoutBuilder {
        VertexLayoutBuilder::default()
    }

    /// Number of floats of one vertex.
    pub fn stride(&self) -> usize {
        self.attributes.iter().map(|v| v.size as usize).sum()
    }

    /// Offset, in floats, of the attribute at `index` in declaration order.
    pub fn offset(&self, index: usize) -> usize {
        self.attributes
            .iter()
            .take(index)
            .map(|v| v.size as usize)
            .sum()
    }

    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Checks `vertices` against this layout and returns the vertex count.
    pub fn validate(&self, vertices: &[f32]) -> Result<usize> {
        let stride = self.stride();
        if stride == 0 {
            return Err(Error::InvalidData("layout has no attributes".into()));
        }

        for v in &self.attributes {
            if v.size == 0 || v.size > 4 {
                return Err(Error::InvalidData(format!(
                    "attribute at location {} has {} components",
                    v.location, v.size
                )));
            }
        }

        if vertices.len() % stride != 0 {
            return Err(Error::InvalidData(format!(
                "{} floats is not a multiple of the stride {}",
                vertices.len(),
                stride
            )));
        }

        Ok(vertices.len() / stride)
    }
}

#[derive(Default)]
pub struct VertexLayoutBuilder {
    attributes: Vec<VertexAttribute>,
}

impl VertexLayoutBuilder {
    #[inline]
    pub fn with(mut self, location: u32, size: u8) -> Self {
        self.attributes.push(VertexAttribute { location, size });
        self
    }

    #[inline]
    pub fn finish(self) -> VertexLayout {
        VertexLayout {
            attributes: self.attributes,
        }
    }
}

/// A vertex array object together with the buffer that feeds it.
pub struct VertexArray {
    device: Device,
    id: VertexArrayId,
    len: u32,
}

impl VertexArray {
    pub fn new(device: &Device, layout: &VertexLayout, vertices: &[f32]) -> Result<Self> {
        let len = layout.validate(vertices)?;
        let id = device.create_vertex_array(layout, vertices)?;

        Ok(VertexArray {
            device: device.clone(),
            id,
            len: len as u32,
        })
    }

    #[inline]
    pub fn id(&self) -> VertexArrayId {
        self.id
    }

    /// Number of vertices stored.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Draws every vertex with the currently bound program.
    pub fn draw(&self, primitive: Primitive) -> Result<()> {
        self.draw_range(primitive, 0, self.len)
    }

    pub fn draw_range(&self, primitive: Primitive, first: u32, count: u32) -> Result<()> {
        if first.checked_add(count).map_or(true, |end| end > self.len) {
            return Err(Error::InvalidData(format!(
                "range {}..+{} is out of bounds of {} vertices",
                first, count, self.len
            )));
        }

        self.device.draw(self.id, primitive, first, count)
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        if let Err(err) = self.device.delete_vertex_array(self.id) {
            warn!("Failed to delete {}: {}", self.id, err);
        }
    }
}
