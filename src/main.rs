use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use study_assist::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    log::info!(
        "Using completion model {} at {}",
        config.completion_model,
        config.completion_api_base
    );

    let state = AppState::new(config);

    log::info!("Starting HTTP server on {}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
