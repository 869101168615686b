//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! XYZ tile addresses

use std::fmt;

/// Raster tile image format
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum TileFormat {
    Png,
    Jpeg,
}

impl TileFormat {
    pub fn from_extension(ext: &str) -> Option<TileFormat> {
        match ext {
            "png" => Some(TileFormat::Png),
            "jpg" | "jpeg" => Some(TileFormat::Jpeg),
            _ => None,
        }
    }
    pub fn extension(&self) -> &'static str {
        match self {
            TileFormat::Png => "png",
            TileFormat::Jpeg => "jpg",
        }
    }
    pub fn content_type(&self) -> &'static str {
        match self {
            TileFormat::Png => "image/png",
            TileFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Validated tile request
#[derive(PartialEq, Clone, Debug)]
pub struct TileRequest {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
    pub format: TileFormat,
}

impl TileRequest {
    /// Parse the path segments of `/{zoom}/{x}/{y}.{ext}`.
    ///
    /// Returns `None` for anything which is not a tile of the grid
    /// up to `maxzoom` in one of the enabled `formats`.
    pub fn parse(
        zoom: &str,
        x: &str,
        y: &str,
        maxzoom: u8,
        formats: &[TileFormat],
    ) -> Option<TileRequest> {
        let ypt = y.find('.')?;
        let format = TileFormat::from_extension(&y[ypt + 1..])?;
        if !formats.contains(&format) {
            return None;
        }
        let zoom = zoom.parse::<u8>().ok()?;
        let x = x.parse::<u32>().ok()?;
        let y = y[..ypt].parse::<u32>().ok()?;
        if zoom > maxzoom {
            return None;
        }
        let tiles = 1u64.checked_shl(zoom as u32).unwrap_or(u64::MAX);
        if x as u64 >= tiles || y as u64 >= tiles {
            return None;
        }
        Some(TileRequest { zoom, x, y, format })
    }
}

impl fmt::Display for TileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}.{}",
            self.zoom,
            self.x,
            self.y,
            self.format.extension()
        )
    }
}
