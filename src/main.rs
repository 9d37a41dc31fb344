use actix_web::{middleware::Logger, web, App, HttpServer};

use study_bot::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e)
    })?;

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let max_payload_bytes = config.max_payload_bytes;

    let state = AppState::new(config).map_err(std::io::Error::other)?;

    log::info!("Starting Study Bot on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure(max_payload_bytes))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
