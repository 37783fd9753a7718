//! Geometry for a single flat hexagonal tile.

use crate::{
    grid::OUTER_TO_INNER_RADIUS,
    render::unit::{Point2, Vector2, Vector3},
};
use nalgebra::{Rotation2, Vector2 as NVector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_3;

/// Get the 6 outer vertices of a pointy-top hexagon. The first vertex is
/// directly above the centre, then each following vertex is rotated another
/// 60 degrees counter-clockwise from there.
pub fn hex_vertices(centre: Point2, outer_radius: f64) -> [Point2; 6] {
    let up = NVector2::new(0.0, outer_radius);
    let mut vertices = [centre; 6];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let rotation = Rotation2::new(FRAC_PI_3 * i as f64);
        let offset: Vector2 = (rotation * up).into();
        *vertex = centre + offset;
    }
    vertices
}

/// A triangle fan covering a single hexagon: one vertex at the centre plus
/// the 6 outer vertices, and one triangle per side. This is the shape of
/// every tile in a rendered grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexFanMesh {
    /// The centre (index 0), then the ring from [hex_vertices] (indices 1-6)
    pub vertices: [Point2; 7],
    /// Vertex indices, three per triangle
    pub triangles: [u32; 18],
    /// One normal per vertex
    pub normals: [Vector3; 7],
    /// One texture coordinate per vertex. The texture is stretched over the
    /// hexagon's bounding box, with `(0, 0)` in the bottom left.
    pub uvs: [Point2; 7],
}

impl HexFanMesh {
    pub const VERTEX_COUNT: usize = 7;
    pub const INDEX_COUNT: usize = 18;

    /// Vertex indices for the 6 triangles of the fan. Each triangle uses the
    /// centre and two adjacent ring vertices, with the last one wrapping back
    /// around to the first ring vertex.
    pub const TRIANGLES: [u32; 18] = [
        0, 2, 1, //
        0, 3, 2, //
        0, 4, 3, //
        0, 5, 4, //
        0, 6, 5, //
        0, 1, 6, //
    ];

    /// Build the fan mesh for a hexagon with the given centre and outer radius
    pub fn new(centre: Point2, outer_radius: f64) -> Self {
        let inner_radius = outer_radius * OUTER_TO_INNER_RADIUS;

        let mut vertices = [centre; 7];
        vertices[1..].copy_from_slice(&hex_vertices(centre, outer_radius));

        let mut uvs = [Point2::default(); 7];
        for (uv, vertex) in uvs.iter_mut().zip(vertices.iter()) {
            // Position relative to the bottom left of the hexagon's bounding
            // box, then scaled down to [0, 1]
            let from_bottom_left = *vertex - centre;
            *uv = Point2 {
                x: (from_bottom_left.x + inner_radius) / (inner_radius * 2.0),
                y: (from_bottom_left.y + outer_radius) / (outer_radius * 2.0),
            };
        }

        Self {
            vertices,
            triangles: Self::TRIANGLES,
            normals: [Vector3::FORWARD; 7],
            uvs,
        }
    }

    /// Iterate over the triangles of this mesh as vertex triples
    pub fn triangle_vertices(&self) -> impl Iterator<Item = [Point2; 3]> + '_ {
        self.triangles.chunks_exact(3).map(move |triangle| {
            [
                self.vertices[triangle[0] as usize],
                self.vertices[triangle[1] as usize],
                self.vertices[triangle[2] as usize],
            ]
        })
    }
}
