//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::ApplicationCfg;
use crate::core::tile::{TileFormat, TileRequest};
use crate::core::Config;
use crate::render::{GraticuleRenderer, RenderError, Renderer};
use std::time::Instant;
use tile_grid::{Extent, Srs, TileProjection};

/// Raster tile service
#[derive(Clone)]
pub struct TileService {
    pub projection: TileProjection,
    pub renderer: Box<dyn Renderer>,
    pub formats: Vec<TileFormat>,
}

impl TileService {
    pub fn new(maxzoom: u8, renderer: Box<dyn Renderer>) -> TileService {
        TileService {
            projection: TileProjection::new(maxzoom),
            renderer,
            formats: vec![TileFormat::Png],
        }
    }
    /// SRS of rendered tiles
    pub fn srs(&self) -> Srs {
        self.renderer.srs()
    }
    pub fn maxzoom(&self) -> u8 {
        self.projection.max_zoom()
    }
    /// Validate tile URL path segments
    pub fn tile_request(&self, zoom: &str, x: &str, y: &str) -> Option<TileRequest> {
        TileRequest::parse(zoom, x, y, self.maxzoom(), &self.formats)
    }
    /// Extent of tile x, y, z in XYZ adressing scheme in renderer SRS
    pub fn tile_extent(&self, zoom: u8, xtile: u32, ytile: u32) -> Extent {
        let (x, y) = (xtile as f64, ytile as f64);
        let (lon0, lat0) = self.projection.tile_to_lonlat(zoom, x, y + 1.0);
        let (lon1, lat1) = self.projection.tile_to_lonlat(zoom, x + 1.0, y);
        let srs = self.srs();
        let (minx, miny) = srs.forward(lon0, lat0);
        let (maxx, maxy) = srs.forward(lon1, lat1);
        Extent {
            minx,
            miny,
            maxx,
            maxy,
        }
    }
    /// Render requested tile
    pub fn tile(&self, request: &TileRequest) -> Result<Vec<u8>, RenderError> {
        let extent = self.tile_extent(request.zoom, request.x, request.y);
        debug!("{} rendering {:?}", request, extent);
        let now = Instant::now();
        let tile = self.renderer.render(&extent, request.format)?;
        debug!(
            "{} rendered {} bytes in {}ms",
            request,
            tile.len(),
            now.elapsed().as_millis()
        );
        Ok(tile)
    }
}

impl<'a> Config<'a, ApplicationCfg> for TileService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let tiles_cfg = &config.service.tiles;
        let formats = tiles_cfg
            .formats
            .iter()
            .map(|ext| {
                TileFormat::from_extension(ext)
                    .ok_or_else(|| format!("Unsupported tile format '{}'", ext))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if formats.is_empty() {
            return Err("No tile formats enabled".to_string());
        }
        let renderer = GraticuleRenderer::from_config(config)?;
        let mut service = TileService::new(tiles_cfg.maxzoom, Box::new(renderer));
        service.formats = formats;
        Ok(service)
    }
    fn gen_config() -> String {
        let mut config = r#"# basemap configuration

[service.tiles]
# Serve test map at /
viewer = true
maxzoom = 15
# Width and height of rendered tiles in pixels
tile_size = 512
formats = ["png"]
# Initial test map position
#center = [7.0580, 52.2384]
#start_zoom = 14
"#
        .to_string();
        config.push_str(&GraticuleRenderer::gen_config());
        config
    }
}
