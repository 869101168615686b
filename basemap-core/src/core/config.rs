//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub service: ServiceCfg,
    pub renderer: RendererCfg,
    pub webserver: WebserverCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServiceCfg {
    pub tiles: ServiceTilesCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServiceTilesCfg {
    /// Serve test map at /
    pub viewer: bool,
    #[serde(default = "default_maxzoom")]
    pub maxzoom: u8,
    /// Width and height of rendered tiles in pixels
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    /// Enabled tile formats (file extensions)
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    /// Initial test map position (lon, lat)
    pub center: Option<(f64, f64)>,
    pub start_zoom: Option<u8>,
}

pub fn default_maxzoom() -> u8 {
    15
}

pub fn default_tile_size() -> u32 {
    512
}

pub fn default_formats() -> Vec<String> {
    vec!["png".to_string()]
}

#[derive(Deserialize, Clone, Debug)]
pub struct RendererCfg {
    /// Spatial reference system of rendered maps
    #[serde(default = "default_srid")]
    pub srid: i32,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_line_color")]
    pub line_color: String,
    /// Graticule spacing in degrees (None: no graticule)
    pub graticule: Option<f64>,
    /// Draw tile borders
    #[serde(default)]
    pub border: bool,
}

pub fn default_srid() -> i32 {
    3857
}

pub fn default_background() -> String {
    "#f2efe9".to_string()
}

pub fn default_line_color() -> String {
    "#9e9e9e".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct WebserverCfg {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub threads: Option<u8>,
    // Cache-Control headers set by web server
    // https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Cache-Control#Expiration
    pub cache_control_max_age: Option<u32>,
    #[serde(rename = "static", default)]
    pub static_: Vec<WebserverStaticCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct WebserverStaticCfg {
    pub path: String,
    pub dir: String,
}

pub const DEFAULT_CONFIG: &'static str = r#"
[service.tiles]
viewer = true
maxzoom = 15
tile_size = 512
formats = ["png"]

[renderer]
srid = 3857
graticule = 10.0

[webserver]
bind = "127.0.0.1"
port = 8088
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]_]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
