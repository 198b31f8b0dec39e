use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;

use tripwise_api::data::catalog::Catalog;
use tripwise_api::routes;

pub struct TestApp {
    pub catalog: Arc<Catalog>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(Catalog::seed()),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(self.catalog.clone()))
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
    }
}
