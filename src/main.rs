use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripwise_api::data::catalog::Catalog;
use tripwise_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let catalog = Arc::new(Catalog::seed());
    println!("Destination catalog seeded");

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(catalog.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/destinations")
                            .route("", web::get().to(routes::destination::get_destinations))
                            .route("/{id}", web::get().to(routes::destination::get_by_id)),
                    )
                    .service(
                        web::scope("/trips")
                            .route("", web::get().to(routes::trip::get_trips))
                            .route("/estimate", web::post().to(routes::trip::estimate)),
                    )
                    .service(
                        web::scope("/group-trips")
                            .route("/split", web::post().to(routes::group::split)),
                    )
                    .route("/rewards", web::get().to(routes::reward::get_rewards))
                    .route(
                        "/emergency-contacts",
                        web::get().to(routes::emergency::get_contacts),
                    )
                    .route("/user", web::get().to(routes::user::get_user)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
