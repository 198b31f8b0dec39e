use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::data::catalog::Catalog;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(data: web::Data<Arc<Catalog>>) -> impl Responder {
    let catalog = data.into_inner();

    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let catalog_result = check_catalog(&catalog);
    if catalog_result.status != "ok" {
        health.status = "degraded".to_string();
    }
    health
        .services
        .insert("catalog".to_string(), catalog_result);

    HttpResponse::Ok().json(health)
}

fn check_catalog(catalog: &Catalog) -> ServiceStatus {
    let count = catalog.destinations().len();
    if count == 0 {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("Destination catalog is empty".to_string()),
        }
    } else {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} destinations loaded", count)),
        }
    }
}
