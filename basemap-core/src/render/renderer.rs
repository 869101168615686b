//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::tile::TileFormat;
use dyn_clone::DynClone;
use thiserror::Error;
use tile_grid::{Extent, Srs};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid bounding box {0:?}")]
    InvalidExtent(Extent),
    #[error("Image encoding failed: {0}")]
    Encoding(#[from] image::ImageError),
}

/// Map renderer drawing a bounding box into an encoded image.
///
/// Renderers are not shared between threads. Every web server worker
/// owns its own clone.
pub trait Renderer: DynClone + Send {
    /// Width and height of rendered images in pixels
    fn tile_size(&self) -> u32;
    /// Spatial reference system of rendered bounding boxes
    fn srs(&self) -> Srs;
    /// Render `bbox` given in the renderer's SRS
    fn render(&self, bbox: &Extent, format: TileFormat) -> Result<Vec<u8>, RenderError>;
}

dyn_clone::clone_trait_object!(Renderer);
