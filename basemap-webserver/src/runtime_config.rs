//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use crate::core::{parse_config, read_config, Config};
use crate::service::TileService;
use clap::ArgMatches;
use std::str::FromStr;

pub fn config_from_args(args: &ArgMatches) -> Result<ApplicationCfg, String> {
    let mut config: ApplicationCfg = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath)?
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "")?
    };
    if let Some(bind) = args.value_of("bind") {
        config.webserver.bind = Some(bind.to_string());
    }
    if let Some(port) = args.value_of("port") {
        let port = u16::from_str(port).map_err(|_| format!("Invalid port number '{}'", port))?;
        config.webserver.port = Some(port);
    }
    check_webserver_config(&config)?;
    Ok(config)
}

fn check_webserver_config(config: &ApplicationCfg) -> Result<(), String> {
    if config.webserver.threads == Some(0) {
        return Err("webserver.threads must be greater than 0".to_string());
    }
    Ok(())
}

pub fn gen_config() -> String {
    let toml = r#"
[webserver]
# Bind address. Use 0.0.0.0 to listen on all adresses.
bind = "127.0.0.1"
port = 8088
# Number of worker threads, each with its own renderer (Default: number of CPUs)
#threads = 4
#cache_control_max_age = 43200

#[[webserver.static]]
#path = "/static"
#dir = "./public/"
"#;
    let mut config = TileService::gen_config();
    config.push_str(toml);
    config
}

#[test]
fn test_gen_config() {
    let toml = gen_config();
    println!("{}", toml);
    assert_eq!(Some("# basemap configuration"), toml.lines().next());

    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    assert_eq!(config.webserver.port, Some(8088));
    let service = TileService::from_config(&config).unwrap();
    assert_eq!(service.maxzoom(), 15);
}

#[test]
fn test_config_from_args() {
    use clap::App;

    let app = || {
        App::new("test").args_from_usage(
            "-c, --config=[FILE] 'Load from custom config file'
             --bind=[IPADDRESS] 'Bind web server to this address'
             --port=[PORT] 'Bind web server to this port'",
        )
    };
    let args = app().get_matches_from(vec!["", "--port", "9000"]);
    let config = config_from_args(&args).unwrap();
    assert_eq!(config.webserver.bind, Some("127.0.0.1".to_string()));
    assert_eq!(config.webserver.port, Some(9000));
    assert!(config.service.tiles.viewer);

    let args = app().get_matches_from(vec![
        "",
        "--config",
        "../basemap-core/src/test/example.toml",
        "--bind",
        "127.0.0.2",
    ]);
    let config = config_from_args(&args).unwrap();
    assert_eq!(config.webserver.bind, Some("127.0.0.2".to_string()));
    assert_eq!(config.webserver.port, Some(8080));
    assert_eq!(config.service.tiles.formats, vec!["png", "jpg"]);

    let args = app().get_matches_from(vec!["", "--port", "http"]);
    assert_eq!(
        config_from_args(&args).err(),
        Some("Invalid port number 'http'".to_string())
    );

    let args = app().get_matches_from(vec!["", "-c", "missing.toml"]);
    assert_eq!(
        config_from_args(&args).err(),
        Some("Could not find config file!".to_string())
    );
}

#[test]
fn test_zero_threads() {
    let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert!(check_webserver_config(&config).is_ok());
    config.webserver.threads = Some(0);
    assert_eq!(
        check_webserver_config(&config).err(),
        Some("webserver.threads must be greater than 0".to_string())
    );
    config.webserver.threads = Some(1);
    assert!(check_webserver_config(&config).is_ok());
}

#[test]
fn test_zero_threads_from_file() {
    use clap::App;
    use std::fs;

    let path = std::env::temp_dir().join("basemap_zero_threads.toml");
    let toml = DEFAULT_CONFIG.replace("port = 8088", "port = 8088\nthreads = 0");
    fs::write(&path, toml).unwrap();
    let args = App::new("test")
        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'")
        .get_matches_from(vec!["", "--config", path.to_str().unwrap()]);
    let result = config_from_args(&args);
    let _ = fs::remove_file(&path);
    assert_eq!(
        result.err(),
        Some("webserver.threads must be greater than 0".to_string())
    );
}
