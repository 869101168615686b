//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Style values

use image::Rgb;

/// Parse a color given as `#rrggbb` or `#rgb`
pub fn parse_color(color: &str) -> Result<Rgb<u8>, String> {
    let err = || format!("Invalid color '{}'", color);
    let hex = color.strip_prefix('#').ok_or_else(err)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(err());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
    match hex.len() {
        6 => Ok(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        3 => Ok(Rgb([
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        ])),
        _ => Err(err()),
    }
}
