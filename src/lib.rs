#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Registers every JSON endpoint on an Actix service config.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    use crate::routes::{occasions, users, wardrobe};

    cfg.app_data(web::JsonConfig::default().error_handler(routes::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(routes::path_error_handler))
        .service(occasions::occasion_suggestions)
        .service(occasions::create_occasion)
        .service(occasions::list_occasions)
        .service(occasions::show_occasion)
        .service(occasions::update_occasion)
        .service(occasions::delete_occasion)
        .service(wardrobe::add_clothing_item)
        .service(wardrobe::list_wardrobe)
        .service(wardrobe::show_clothing_item)
        .service(wardrobe::update_clothing_item)
        .service(wardrobe::delete_clothing_item)
        // Fixed `/users/...` paths must be registered before `/users/{user_id}`.
        .service(users::show_my_profile)
        .service(users::update_my_profile)
        .service(users::toggle_favorite)
        .service(users::list_favorites)
        .service(users::show_profile)
        .service(users::create_user)
        .service(users::list_users)
        .service(users::show_user)
        .service(users::update_user)
        .service(users::delete_user);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
