use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::data::{catalog::Catalog, fixtures};
use crate::models::trip::{BudgetComparison, TripCost};
use crate::services::cost_estimator::CostEstimator;

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub destination_id: String,
    pub days: u32,
    pub travelers: u32,
    /// Optional ceiling; when present the response carries a budget
    /// comparison alongside the breakdown.
    pub budget: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub destination_id: String,
    pub days: u32,
    pub travelers: u32,
    pub costs: TripCost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetComparison>,
}

/*
    /api/trips/estimate
*/
pub async fn estimate(
    data: web::Data<Arc<Catalog>>,
    input: web::Json<EstimateRequest>,
) -> impl Responder {
    let catalog = data.into_inner();
    let req = input.into_inner();

    let destination = match catalog.find(&req.destination_id) {
        Some(destination) => destination,
        None => return HttpResponse::NotFound().body("Destination not found."),
    };

    match CostEstimator::estimate(
        destination.average_cost,
        req.days,
        req.travelers,
        destination.visa_required,
    ) {
        Ok(costs) => {
            let budget = match req.budget {
                Some(ceiling) => match CostEstimator::compare_budget(&costs, ceiling) {
                    Ok(comparison) => Some(comparison),
                    Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
                },
                None => None,
            };
            HttpResponse::Ok().json(EstimateResponse {
                destination_id: req.destination_id,
                days: req.days,
                travelers: req.travelers,
                costs,
                budget,
            })
        }
        Err(err) => HttpResponse::BadRequest().body(err.to_string()),
    }
}

/*
    /api/trips
*/
pub async fn get_trips(data: web::Data<Arc<Catalog>>) -> impl Responder {
    let catalog = data.into_inner();
    HttpResponse::Ok().json(fixtures::sample_trips(&catalog))
}
