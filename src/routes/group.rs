use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::models::group::{Expense, TripMember};
use crate::services::expense_splitter::ExpenseLedger;

#[derive(Debug, Deserialize)]
pub struct SplitRequest {
    /// Added members; the organizer is implicit and always included in the
    /// split.
    pub members: Vec<TripMember>,
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Serialize)]
pub struct SplitResponse {
    pub member_count: usize,
    pub total_expenses: f64,
    pub per_person_share: f64,
}

/*
    /api/group-trips/split
*/
pub async fn split(input: web::Json<SplitRequest>) -> impl Responder {
    let req = input.into_inner();

    let ledger = match ExpenseLedger::from_expenses(req.expenses) {
        Ok(ledger) => ledger,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    HttpResponse::Ok().json(SplitResponse {
        member_count: req.members.len(),
        total_expenses: ledger.total(),
        per_person_share: ledger.per_person_share(req.members.len()),
    })
}
