use actix_web::{HttpResponse, Responder};

use crate::data::fixtures;

/*
    /api/user
*/
pub async fn get_user() -> impl Responder {
    HttpResponse::Ok().json(fixtures::sample_user())
}
