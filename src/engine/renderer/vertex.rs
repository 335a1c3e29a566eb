// Vertex structure for colored quads

use super::draw::Quad;
use bytemuck::{Pod, Zeroable};

/// Vertex for 2D quad rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in layer space
    pub position: [f32; 2],
    /// Vertex color (RGBA)
    pub color: [f32; 4],
}

impl Vertex {
    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Color
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Triangulate quads into a plain triangle list (two triangles per quad)
pub fn triangulate(quads: &[Quad], out: &mut Vec<Vertex>) {
    out.reserve(quads.len() * 6);
    for quad in quads {
        let color = quad.color.to_array();
        let [a, b, c, d] = quad.corners;
        for p in [a, b, c, a, c, d] {
            out.push(Vertex {
                position: p.to_array(),
                color,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::draw::Color;
    use glam::Vec2;

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn test_triangulate_two_triangles_per_quad() {
        let quad = Quad {
            corners: [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y],
            color: Color::WHITE,
        };
        let mut out = Vec::new();
        triangulate(&[quad, quad], &mut out);
        assert_eq!(out.len(), 12);
        assert_eq!(out[3].position, [0.0, 0.0]);
        assert_eq!(out[5].position, [0.0, 1.0]);
    }
}
