use fnv::FnvHashSet;
use std::f32::consts::{PI, TAU};

pub struct MeshData {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Unit UV sphere as a triangle list, counter-clockwise seen from outside.
/// Positions double as normals.
pub fn uv_sphere(width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            vertices.push([
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            ]);
        }
    }
    let row = ws + 1;
    let mut indices = Vec::new();
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // pole rows collapse to a single triangle
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData { vertices, indices }
}

/// Unit UV sphere as a line list with one segment per unique triangle edge.
pub fn uv_sphere_wireframe(width_segments: u32, height_segments: u32) -> MeshData {
    let solid = uv_sphere(width_segments, height_segments);
    let mut seen = FnvHashSet::default();
    let mut indices = Vec::new();
    for tri in solid.indices.chunks_exact(3) {
        for (p, q) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let edge = (p.min(q), p.max(q));
            if seen.insert(edge) {
                indices.extend_from_slice(&[edge.0, edge.1]);
            }
        }
    }
    MeshData {
        vertices: solid.vertices,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertices_are_unit_length() {
        let mesh = uv_sphere(8, 4);
        assert_eq!(mesh.vertices.len(), 9 * 5);
        for v in &mesh.vertices {
            let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
        // 2 rows of quads, 2 pole rows of single triangles
        assert_eq!(mesh.indices.len(), 3 * (8 * 2 * 2 + 8 * 2));
    }

    #[test]
    fn wireframe_has_no_duplicate_edges() {
        let mesh = uv_sphere_wireframe(8, 4);
        assert_eq!(mesh.indices.len() % 2, 0);
        let edges: FnvHashSet<(u32, u32)> = mesh
            .indices
            .chunks_exact(2)
            .map(|e| (e[0], e[1]))
            .collect();
        assert_eq!(edges.len(), mesh.indices.len() / 2);
    }
}
