use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use compass_server::{app_state::AppState, auth::JwtService, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let jwt_service = web::Data::new(JwtService::new(
        &config.jwt_secret,
        config.jwt_expiration_hours,
    ));

    let state = AppState::new(config).await.map_err(std::io::Error::other)?;
    let state = web::Data::new(state);

    log::info!("Starting server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(jwt_service.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::start_assessment)
            .service(handlers::list_assessments)
            .service(handlers::get_assessment)
            .service(handlers::record_answer)
            .service(handlers::record_progress)
            .service(handlers::complete_assessment)
            .service(handlers::list_questions)
            .service(handlers::create_question)
            .service(handlers::update_question)
            .service(handlers::delete_question)
            .service(handlers::list_careers)
            .service(handlers::create_career)
            .service(handlers::update_career)
            .service(handlers::delete_career)
            .service(handlers::list_programmes)
            .service(handlers::list_branches)
            .service(handlers::create_branch)
            .service(handlers::create_programme)
            .service(handlers::seed_reference_data)
    })
    .bind((host, port))?
    .run()
    .await
}
