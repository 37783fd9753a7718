//! Utilities for turning a grid into renderable geometry. Everything here
//! produces plain in-memory buffers; uploading or saving them is up to the
//! host.

pub mod grid_mesh;
pub mod mesh;
pub mod unit;
