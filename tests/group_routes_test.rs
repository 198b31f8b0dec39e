mod common;

use actix_web::test;
use serde_json::json;

use common::TestApp;

fn member(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", id),
        "amount_paid": 0.0,
        "amount_owed": 0.0,
        "status": "confirmed"
    })
}

fn expense(id: &str, title: &str, amount: f64) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "amount": amount,
        "paid_by": "current-user",
        "split_between": ["current-user"],
        "category": "other",
        "date": "2024-06-15"
    })
}

#[actix_rt::test]
async fn test_split_divides_by_members_plus_organizer() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/group-trips/split")
        .set_json(&json!({
            "members": [member("m1", "Ada"), member("m2", "Grace"), member("m3", "Lin")],
            "expenses": [expense("e1", "Flights", 640.0), expense("e2", "Hotel", 160.0)]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["member_count"], 3);
    assert_eq!(body["total_expenses"], 800.0);
    // Three added members plus the organizer.
    assert_eq!(body["per_person_share"], 200.0);
}

#[actix_rt::test]
async fn test_split_with_no_members_is_the_raw_total() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/group-trips/split")
        .set_json(&json!({
            "members": [],
            "expenses": [expense("e1", "Dinner", 120.0)]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["per_person_share"], 120.0);
}

#[actix_rt::test]
async fn test_split_rejects_non_positive_amount() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/group-trips/split")
        .set_json(&json!({
            "members": [member("m1", "Ada")],
            "expenses": [expense("e1", "Refund", -50.0)]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body = test::read_body(resp).await;
    assert_eq!(body, "expense amount must be a positive finite number");
}

#[actix_rt::test]
async fn test_split_with_no_expenses() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/group-trips/split")
        .set_json(&json!({
            "members": [member("m1", "Ada")],
            "expenses": []
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total_expenses"], 0.0);
    assert_eq!(body["per_person_share"], 0.0);
}
