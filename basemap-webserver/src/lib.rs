//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;

use basemap_core::{core, service};

mod runtime_config;
mod server;
#[cfg(test)]
mod server_test;
mod static_files;

pub use runtime_config::{config_from_args, gen_config};
pub use server::webserver;
