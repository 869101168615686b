//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, WebserverStaticCfg, DEFAULT_CONFIG};
use crate::core::{parse_config, Config};
use crate::server::{existing_static_dirs, routes};
use crate::service::TileService;
use actix_web::http::{header, StatusCode};
use actix_web::{test, App};

fn config() -> ApplicationCfg {
    let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    config.service.tiles.tile_size = 256;
    config
}

#[actix_web::test]
async fn test_tile() {
    let config = config();
    let service = TileService::from_config(&config).unwrap();
    let app = test::init_service(App::new().configure(routes(service, &config, Vec::new()))).await;

    let req = test::TestRequest::get().uri("/0/0/0.png").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    assert!(resp.headers().get(header::CACHE_CONTROL).is_none());
    let body = test::read_body(resp).await;
    assert_eq!(&body[0..4], b"\x89PNG");

    let req = test::TestRequest::get().uri("/14/8513/5394.png").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_invalid_tile() {
    let config = config();
    let service = TileService::from_config(&config).unwrap();
    let app = test::init_service(App::new().configure(routes(service, &config, Vec::new()))).await;

    for uri in &[
        "/0/0/0",
        "/0/0/0.jpg",
        "/16/0/0.png",
        "/1/2/0.png",
        "/a/0/0.png",
        "/1/0/-1.png",
        "/1/0/0/0.png",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[actix_web::test]
async fn test_cache_control() {
    let mut config = config();
    config.webserver.cache_control_max_age = Some(43200);
    config.service.tiles.formats = vec!["jpg".to_string()];
    let service = TileService::from_config(&config).unwrap();
    let app = test::init_service(App::new().configure(routes(service, &config, Vec::new()))).await;

    let req = test::TestRequest::get().uri("/2/1/1.jpg").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/jpeg"
    );
    assert_eq!(
        resp.headers().get(header::CACHE_CONTROL).unwrap(),
        "max-age=43200"
    );
}

#[actix_web::test]
async fn test_testmap() {
    let mut config = config();
    config.service.tiles.center = Some((8.5, 47.4));
    config.service.tiles.start_zoom = Some(18);
    let service = TileService::from_config(&config).unwrap();
    let app = test::init_service(App::new().configure(routes(service, &config, Vec::new()))).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("setView([47.4, 8.5], 15)"), "{}", html);
    assert!(html.contains("L.tileLayer('/{z}/{x}/{y}.png'"));
    assert!(html.contains("maxZoom: 15,"));
}

#[actix_web::test]
async fn test_no_viewer() {
    let mut config = config();
    config.service.tiles.viewer = false;
    let service = TileService::from_config(&config).unwrap();
    let app = test::init_service(App::new().configure(routes(service, &config, Vec::new()))).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_static_dirs() {
    let mut config = config();
    config.webserver.static_ = vec![
        WebserverStaticCfg {
            path: "/assets".to_string(),
            dir: "./src/static".to_string(),
        },
        WebserverStaticCfg {
            path: "/missing".to_string(),
            dir: "./does-not-exist".to_string(),
        },
    ];
    let static_dirs = existing_static_dirs(&config);
    assert_eq!(static_dirs.len(), 1);
    let service = TileService::from_config(&config).unwrap();
    let app = test::init_service(App::new().configure(routes(service, &config, static_dirs))).await;

    let req = test::TestRequest::get()
        .uri("/assets/index.html")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/1/1/1.png").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
