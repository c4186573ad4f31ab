use actix_web::{middleware::Logger, web, App, HttpServer};

use quizdeck_server::{app_state::AppState, auth::ApiKeyMiddleware, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    config.validate_for_production();

    let state = AppState::new(config).await.map_err(|e| {
        std::io::Error::other(format!("failed to initialize application state: {}", e))
    })?;

    let host = state.config.web_server_host.clone();
    let port = state.config.web_server_port;
    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::from(state.gate.clone()))
            .wrap(ApiKeyMiddleware)
            .wrap(Logger::default())
            .service(handlers::health_check)
            .service(handlers::list_keys)
            .service(handlers::create_key)
            .service(handlers::delete_key)
            // Literal quiz paths are registered before the {id} routes
            .service(handlers::random_question)
            .service(handlers::statistics)
            .service(handlers::filter_questions)
            .service(handlers::questions_by_category)
            .service(handlers::questions_by_difficulty)
            .service(handlers::list_questions)
            .service(handlers::create_question)
            .service(handlers::get_question)
            .service(handlers::update_question)
            .service(handlers::delete_question)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
