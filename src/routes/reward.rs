use actix_web::{HttpResponse, Responder};

use crate::data::fixtures;

/*
    /api/rewards
*/
pub async fn get_rewards() -> impl Responder {
    HttpResponse::Ok().json(fixtures::sample_rewards())
}
