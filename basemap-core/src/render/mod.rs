//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

mod graticule;
mod renderer;
pub mod style;

pub use self::graticule::GraticuleRenderer;
pub use self::renderer::{RenderError, Renderer};

#[cfg(test)]
mod style_test;
