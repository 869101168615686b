//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Built-in renderer drawing background, graticule and tile borders

use crate::core::config::ApplicationCfg;
use crate::core::tile::TileFormat;
use crate::core::Config;
use crate::render::style::parse_color;
use crate::render::{RenderError, Renderer};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use std::io::Cursor;
use tile_grid::{Extent, Srs};

#[derive(Clone, Debug)]
pub struct GraticuleRenderer {
    pub tile_size: u32,
    pub srs: Srs,
    pub background: Rgb<u8>,
    pub line_color: Rgb<u8>,
    /// Line spacing in degrees
    pub graticule: Option<f64>,
    pub border: bool,
}

impl GraticuleRenderer {
    pub fn new(tile_size: u32, srs: Srs) -> GraticuleRenderer {
        GraticuleRenderer {
            tile_size,
            srs,
            background: Rgb([0xf2, 0xef, 0xe9]),
            line_color: Rgb([0x9e, 0x9e, 0x9e]),
            graticule: None,
            border: false,
        }
    }

    /// Multiples of `step` within `min..=max`, empty if there are more than `limit + 1`
    pub(crate) fn steps(min: f64, max: f64, step: f64, limit: u32) -> Vec<f64> {
        let first = (min / step).ceil();
        let last = (max / step).floor();
        let n = last - first;
        // f64 integers above 2^53 are not exact
        const MAX_EXACT: f64 = 9007199254740992.0;
        if !(0.0..=limit as f64).contains(&n) || first.abs() > MAX_EXACT || last.abs() > MAX_EXACT
        {
            return Vec::new();
        }
        (first as i64..=last as i64)
            .map(|i| i as f64 * step)
            .collect()
    }

    fn draw_graticule(&self, img: &mut RgbImage, bbox: &Extent, step: f64) {
        let size = self.tile_size as f32;
        let (lon0, lat0) = self.srs.inverse(bbox.minx, bbox.miny);
        let (lon1, lat1) = self.srs.inverse(bbox.maxx, bbox.maxy);
        for lon in Self::steps(lon0, lon1, step, self.tile_size) {
            let (x, _) = self.srs.forward(lon, 0.0);
            let px = ((x - bbox.minx) / bbox.width() * self.tile_size as f64) as f32;
            draw_line_segment_mut(img, (px, 0.0), (px, size - 1.0), self.line_color);
        }
        for lat in Self::steps(lat0, lat1, step, self.tile_size) {
            let (_, y) = self.srs.forward(0.0, lat);
            let py = ((bbox.maxy - y) / bbox.height() * self.tile_size as f64) as f32;
            draw_line_segment_mut(img, (0.0, py), (size - 1.0, py), self.line_color);
        }
    }
}

impl Renderer for GraticuleRenderer {
    fn tile_size(&self) -> u32 {
        self.tile_size
    }
    fn srs(&self) -> Srs {
        self.srs
    }
    fn render(&self, bbox: &Extent, format: TileFormat) -> Result<Vec<u8>, RenderError> {
        let valid = [bbox.minx, bbox.miny, bbox.maxx, bbox.maxy]
            .iter()
            .all(|v| v.is_finite());
        if !valid || bbox.width() <= 0.0 || bbox.height() <= 0.0 {
            return Err(RenderError::InvalidExtent(bbox.clone()));
        }
        let mut img = RgbImage::from_pixel(self.tile_size, self.tile_size, self.background);
        if let Some(step) = self.graticule.filter(|step| step.is_finite() && *step > 0.0) {
            self.draw_graticule(&mut img, bbox, step);
        }
        if self.border {
            let rect = Rect::at(0, 0).of_size(self.tile_size, self.tile_size);
            draw_hollow_rect_mut(&mut img, rect, self.line_color);
        }

        let image_format = match format {
            TileFormat::Png => ImageFormat::Png,
            TileFormat::Jpeg => ImageFormat::Jpeg,
        };
        let mut data = Vec::new();
        DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut data), image_format)?;
        Ok(data)
    }
}

impl<'a> Config<'a, ApplicationCfg> for GraticuleRenderer {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let cfg = &config.renderer;
        if config.service.tiles.tile_size == 0 {
            return Err("tile_size must be greater than 0".to_string());
        }
        let srs = Srs::from_srid(cfg.srid)
            .ok_or_else(|| format!("Unsupported renderer SRID {}", cfg.srid))?;
        if let Some(step) = cfg.graticule {
            if !step.is_finite() || step <= 0.0 {
                return Err(format!("Invalid graticule spacing {}", step));
            }
        }
        Ok(GraticuleRenderer {
            tile_size: config.service.tiles.tile_size,
            srs,
            background: parse_color(&cfg.background)?,
            line_color: parse_color(&cfg.line_color)?,
            graticule: cfg.graticule,
            border: cfg.border,
        })
    }
    fn gen_config() -> String {
        let toml = r##"
[renderer]
# Spatial reference system of rendered maps (3857 or 4326)
srid = 3857
background = "#f2efe9"
line_color = "#9e9e9e"
# Graticule spacing in degrees
graticule = 10.0
# Draw tile borders
border = false
"##;
        toml.to_string()
    }
}
