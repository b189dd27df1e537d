use cube_viewer::mesh::{Vertex, CUBE_INDICES, CUBE_VERTICES};
use glam::Vec3;
use std::collections::{BTreeSet, HashMap};

fn triangles() -> Vec<[u32; 3]> {
    CUBE_INDICES
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect()
}

fn position(index: u32) -> Vec3 {
    Vec3::from_array(CUBE_VERTICES[index as usize].position)
}

#[cfg(test)]
mod geometry_tests {
    use super::*;

    #[test]
    fn test_eight_vertices_thirty_six_indices() {
        assert_eq!(CUBE_VERTICES.len(), 8);
        assert_eq!(CUBE_INDICES.len(), 36);
    }

    #[test]
    fn test_indices_reference_only_the_eight_vertices() {
        for &index in &CUBE_INDICES {
            assert!(index < 8, "index {} out of range", index);
        }
    }

    #[test]
    fn test_no_degenerate_triangles() {
        for tri in triangles() {
            let unique: BTreeSet<u32> = tri.iter().copied().collect();
            assert_eq!(unique.len(), 3, "degenerate triangle {:?}", tri);

            let area = (position(tri[1]) - position(tri[0]))
                .cross(position(tri[2]) - position(tri[0]))
                .length();
            assert!(area > 1e-6, "zero-area triangle {:?}", tri);
        }
    }

    #[test]
    fn test_no_duplicate_triangles() {
        let mut seen = BTreeSet::new();
        for tri in triangles() {
            let key: BTreeSet<u32> = tri.iter().copied().collect();
            assert!(
                seen.insert(key),
                "triangle {:?} duplicates an earlier one",
                tri
            );
        }
    }

    #[test]
    fn test_covers_exactly_six_faces_with_two_triangles_each() {
        // Every triangle must lie in one axis-aligned face plane, and each of
        // the six planes must carry exactly two triangles.
        let mut per_face: HashMap<(usize, i8), usize> = HashMap::new();

        for tri in triangles() {
            let verts = [position(tri[0]), position(tri[1]), position(tri[2])];

            let face = (0..3).find_map(|axis| {
                let value = verts[0][axis];
                if verts.iter().all(|v| (v[axis] - value).abs() < 1e-6) {
                    Some((axis, value.signum() as i8))
                } else {
                    None
                }
            });

            let face = face.unwrap_or_else(|| panic!("triangle {:?} is not face-aligned", tri));
            *per_face.entry(face).or_insert(0) += 1;
        }

        assert_eq!(per_face.len(), 6, "must cover all six faces");
        for (face, count) in per_face {
            assert_eq!(count, 2, "face {:?} must have exactly two triangles", face);
        }
    }

    #[test]
    fn test_winding_faces_outward() {
        // The cube is centered on the origin, so an outward-wound triangle's
        // geometric normal points away from the origin.
        for tri in triangles() {
            let a = position(tri[0]);
            let b = position(tri[1]);
            let c = position(tri[2]);

            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;

            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {:?} winds inward",
                tri
            );
        }
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_three_packed_floats() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 3 * std::mem::size_of::<f32>() as u64);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

        let [attribute] = layout.attributes else {
            panic!("expected exactly one vertex attribute");
        };
        assert_eq!(attribute.format, wgpu::VertexFormat::Float32x3);
        assert_eq!(attribute.offset, 0);
        assert_eq!(attribute.shader_location, 0);
    }

    #[test]
    fn test_vertex_data_casts_to_plain_bytes() {
        let bytes: &[u8] = bytemuck::cast_slice(&CUBE_VERTICES);
        assert_eq!(bytes.len(), 8 * 12);
    }
}
