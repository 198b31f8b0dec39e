use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::data::catalog::Catalog;
use crate::models::destination::Destination;
use crate::services::destination_filter::DestinationFilter;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    budget: Option<f64>,
    search: Option<String>,
    limit: Option<u16>,
}

/*
    /api/destinations?budget=&search=&limit=
*/
pub async fn get_destinations(
    data: web::Data<Arc<Catalog>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let catalog = data.into_inner();

    let mut results: Vec<&Destination> = match params.budget {
        Some(budget) => match DestinationFilter::by_budget(catalog.destinations(), budget) {
            Ok(matches) => matches,
            Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
        },
        None => catalog.destinations().iter().collect(),
    };

    if let Some(search) = &params.search {
        results = DestinationFilter::by_query(results, search);
    }
    if let Some(limit) = params.limit {
        results.truncate(limit.into());
    }

    HttpResponse::Ok().json(results)
}

/*
    /api/destinations/{id}
*/
pub async fn get_by_id(data: web::Data<Arc<Catalog>>, path: web::Path<String>) -> impl Responder {
    let catalog = data.into_inner();
    let id = path.into_inner();

    match catalog.find(&id) {
        Some(destination) => HttpResponse::Ok().json(destination),
        None => HttpResponse::NotFound().body("Destination not found."),
    }
}
