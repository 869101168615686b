//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::ServiceTilesCfg;
use crate::service::TileService;

static TESTMAP_TEMPLATE: &str = include_str!("static/index.html");

const DEFAULT_CENTER: (f64, f64) = (7.0580, 52.2384);
const DEFAULT_START_ZOOM: u8 = 14;

/// Leaflet map showing the tiles of the service
pub struct TestMap {
    pub html: String,
}

impl TestMap {
    pub fn new(cfg: &ServiceTilesCfg, service: &TileService) -> TestMap {
        let (lon, lat) = cfg.center.unwrap_or(DEFAULT_CENTER);
        let start_zoom = cfg
            .start_zoom
            .unwrap_or(DEFAULT_START_ZOOM)
            .min(service.maxzoom());
        let format = service
            .formats
            .first()
            .map(|f| f.extension())
            .unwrap_or("png");
        let html = TESTMAP_TEMPLATE
            .replace("__LON__", &lon.to_string())
            .replace("__LAT__", &lat.to_string())
            .replace("__START_ZOOM__", &start_zoom.to_string())
            .replace("__MAXZOOM__", &service.maxzoom().to_string())
            .replace("__FORMAT__", format);
        TestMap { html }
    }
}
