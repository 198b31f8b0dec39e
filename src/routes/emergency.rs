use actix_web::{web, HttpResponse, Responder};

use crate::data::fixtures;
use crate::models::emergency::ContactType;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    #[serde(rename = "type")]
    contact_type: Option<ContactType>,
}

/*
    /api/emergency-contacts?type=
*/
pub async fn get_contacts(params: web::Query<QueryParams>) -> impl Responder {
    let mut contacts = fixtures::sample_emergency_contacts();
    if let Some(contact_type) = params.contact_type {
        contacts.retain(|c| c.contact_type == contact_type);
    }
    HttpResponse::Ok().json(contacts)
}
