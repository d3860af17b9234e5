use actix_files::Files;
use actix_web::{middleware, App, HttpServer};
use std::env;

/// Static host for the built map bundle
struct ServerConfig {
    port: u16,
    dist_dir: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let dist_dir = env::var("DIST_DIR").unwrap_or_else(|_| "./dist".to_string());
        Self { port, dist_dir }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();
    println!("Serving {} on 0.0.0.0:{}", config.dist_dir, config.port);

    let dist_dir = config.dist_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/", dist_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
