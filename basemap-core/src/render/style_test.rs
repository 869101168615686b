//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::render::style::parse_color;
use image::Rgb;

#[test]
fn test_parse_color() {
    assert_eq!(parse_color("#f2efe9"), Ok(Rgb([0xf2, 0xef, 0xe9])));
    assert_eq!(parse_color("#000000"), Ok(Rgb([0, 0, 0])));
    assert_eq!(parse_color("#FFF"), Ok(Rgb([255, 255, 255])));
    assert_eq!(parse_color("#a0b"), Ok(Rgb([0xaa, 0x00, 0xbb])));

    assert_eq!(parse_color("f2efe9"), Err("Invalid color 'f2efe9'".to_string()));
    assert!(parse_color("#f2efe").is_err());
    assert!(parse_color("#gg0000").is_err());
    assert!(parse_color("#+1+1+1").is_err());
    assert!(parse_color("").is_err());
}
