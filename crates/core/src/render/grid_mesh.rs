//! A single mesh covering every cell of a grid.

use crate::{
    grid::{GridGeometry, GridIndex},
    render::{
        mesh::HexFanMesh,
        unit::{Point2, Vector3},
    },
};
use anyhow::anyhow;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The fan meshes of every cell in a grid, concatenated into one set of
/// buffers. Cells appear in storage order (row by row from the bottom left,
/// same as [HexGrid](crate::HexGrid)), and each cell owns a fixed-size slice
/// of each buffer: cell `i` has vertices `7i..7i+7` and indices
/// `18i..18i+18`. Triangle indices refer to the shared vertex buffer.
///
/// Cells are generated in parallel, but since every cell writes into its own
/// pre-allocated slice the output is always identical.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridMesh {
    pub vertices: Vec<Point2>,
    pub triangles: Vec<u32>,
    pub normals: Vec<Vector3>,
    pub uvs: Vec<Point2>,
}

impl GridMesh {
    /// Build the mesh for every cell of a grid, in grid-local space. Returns
    /// an error if the grid has too many vertices to index with `u32`.
    pub fn new(geometry: &GridGeometry) -> anyhow::Result<Self> {
        let cell_count = geometry.cell_count();
        let vertex_count = cell_count * HexFanMesh::VERTEX_COUNT;
        // Make sure the largest index we'll write fits in the index type
        u32::try_from(vertex_count).map_err(|_| {
            anyhow!(
                "grid of {} cells needs {} vertices, which is too many to index",
                cell_count,
                vertex_count
            )
        })?;

        let mut vertices = vec![Point2::default(); vertex_count];
        let mut triangles = vec![0; cell_count * HexFanMesh::INDEX_COUNT];
        let mut uvs = vec![Point2::default(); vertex_count];
        let cells_wide = usize::from(geometry.cells_wide());

        timed!("Grid mesh generation", {
            vertices
                .par_chunks_mut(HexFanMesh::VERTEX_COUNT)
                .zip(triangles.par_chunks_mut(HexFanMesh::INDEX_COUNT))
                .zip(uvs.par_chunks_mut(HexFanMesh::VERTEX_COUNT))
                .enumerate()
                .for_each(|(i, ((cell_vertices, cell_triangles), cell_uvs))| {
                    // Grids are at most u16::MAX on each side, so these fit
                    let index = GridIndex::new(
                        (i % cells_wide) as i32,
                        (i / cells_wide) as i32,
                    );
                    let mesh = HexFanMesh::new(
                        geometry.cell_centre(index),
                        geometry.outer_radius(),
                    );

                    // Checked above that this can't overflow
                    let offset = (i * HexFanMesh::VERTEX_COUNT) as u32;
                    cell_vertices.copy_from_slice(&mesh.vertices);
                    cell_uvs.copy_from_slice(&mesh.uvs);
                    for (dest, src) in
                        cell_triangles.iter_mut().zip(mesh.triangles.iter())
                    {
                        *dest = offset + src;
                    }
                })
        });

        Ok(Self {
            vertices,
            triangles,
            normals: vec![Vector3::FORWARD; vertex_count],
            uvs,
        })
    }

    /// Number of cells covered by this mesh
    pub fn cell_count(&self) -> usize {
        self.vertices.len() / HexFanMesh::VERTEX_COUNT
    }

    /// Get the vertices of a single cell, by its position in storage order
    pub fn cell_vertices(&self, cell: usize) -> Option<&[Point2]> {
        let start = cell.checked_mul(HexFanMesh::VERTEX_COUNT)?;
        self.vertices.get(start..start + HexFanMesh::VERTEX_COUNT)
    }
}
