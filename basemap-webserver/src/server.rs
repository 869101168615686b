//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, WebserverStaticCfg};
use crate::core::Config;
use crate::runtime_config::config_from_args;
use crate::service::TileService;
use crate::static_files::TestMap;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::http::header;
use actix_web::rt::System;
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use clap::ArgMatches;
use std::path::Path;
use std::str::FromStr;

/// Per worker application state
struct AppState {
    service: TileService,
    cache_max_age: Option<u32>,
}

async fn tile(
    state: web::Data<AppState>,
    params: web::Path<(String, String, String)>,
) -> HttpResponse {
    let (zoom, x, y) = params.into_inner();
    let request = match state.service.tile_request(&zoom, &x, &y) {
        Some(request) => request,
        None => return HttpResponse::NotFound().finish(),
    };
    match state.service.tile(&request) {
        Ok(tile) => {
            let mut resp = HttpResponse::Ok();
            resp.content_type(request.format.content_type());
            if let Some(max_age) = state.cache_max_age {
                resp.insert_header(header::CacheControl(vec![
                    header::CacheDirective::MaxAge(max_age),
                ]));
            }
            resp.body(tile)
        }
        Err(e) => {
            error!("Rendering tile {} failed: {}", request, e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn testmap(testmap: web::Data<TestMap>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(testmap.html.clone())
}

pub(crate) fn existing_static_dirs(config: &ApplicationCfg) -> Vec<WebserverStaticCfg> {
    config
        .webserver
        .static_
        .iter()
        .filter(|static_dir| {
            let exists = Path::new(&static_dir.dir).is_dir();
            if !exists {
                warn!("Static file directory '{}' not found", static_dir.dir);
            }
            exists
        })
        .cloned()
        .collect()
}

/// Routes of one worker owning `service`
pub(crate) fn routes(
    service: TileService,
    config: &ApplicationCfg,
    static_dirs: Vec<WebserverStaticCfg>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    let viewer = config.service.tiles.viewer;
    let map = TestMap::new(&config.service.tiles, &service);
    let state = AppState {
        service,
        cache_max_age: config.webserver.cache_control_max_age,
    };
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state));
        for static_dir in &static_dirs {
            cfg.service(Files::new(&static_dir.path, &static_dir.dir));
        }
        if viewer {
            cfg.app_data(web::Data::new(map))
                .route("/", web::get().to(testmap));
        }
        cfg.route("/{zoom}/{x}/{y}", web::get().to(tile));
    }
}

pub fn webserver(args: ArgMatches<'static>) -> Result<(), String> {
    let config = config_from_args(&args)?;
    let service = TileService::from_config(&config)?;
    info!(
        "Rendering tiles in EPSG:{} up to zoom level {}",
        service.srs().srid(),
        service.maxzoom()
    );
    let static_dirs = existing_static_dirs(&config);
    let host = config
        .webserver
        .bind
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = config.webserver.port.unwrap_or(8088);
    let bind_addr = format!("{}:{}", host, port);
    let threads = config
        .webserver
        .threads
        .map(|n| n as usize)
        .unwrap_or_else(num_cpus::get);
    let viewer = config.service.tiles.viewer;
    let openbrowser =
        bool::from_str(args.value_of("openbrowser").unwrap_or("true")).unwrap_or(false);

    System::new().block_on(async move {
        let server = HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allowed_methods(vec!["GET"])
                        .send_wildcard(),
                )
                .configure(routes(service.clone(), &config, static_dirs.clone()))
        })
        .workers(threads)
        .bind(&bind_addr)
        .map_err(|e| format!("Can not start server on {}: {}", bind_addr, e))?
        .shutdown_timeout(3) // default: 30s
        .run();

        info!("Serving tiles on http://{} with {} workers", bind_addr, threads);
        if openbrowser && viewer {
            let _res = open::that(format!("http://{}:{}", &host, port));
        }
        server.await.map_err(|e| e.to_string())
    })
}
