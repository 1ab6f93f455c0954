// HTTP tests for POST /api/v1/calculations
//
// Runs the full route table in-process with actix-web's test utilities.

use actix_web::{test, App};
use adsplit::calculator::controllers::CalculationResponse;
use adsplit::calculator::AdType;
use adsplit::core::Currency;
use adsplit::middleware::{RequestId, REQUEST_ID_HEADER};
use adsplit::routes;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::*;

#[actix_web::test]
async fn test_pre_roll_calculation() {
    let (state, _) = test_state(Currency::INR);
    let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/calculations")
        .set_json(pre_roll_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: CalculationResponse = test::read_body_json(resp).await;
    assert_eq!(body.platform, None);
    assert_eq!(body.currency, Currency::INR);

    let breakdown = &body.breakdown;
    assert_eq!(breakdown.revenue_for(AdType::PreRoll), dec!(2000));
    assert_eq!(breakdown.gross_revenue, dec!(2000));
    assert_eq!(breakdown.deductions, dec!(101));
    assert_eq!(breakdown.net_revenue, dec!(1899));
    assert_eq!(breakdown.shares.creator_share, dec!(721.62));
    assert_shares_cover_net(breakdown);

    assert_eq!(body.display.gross_revenue, "₹2000.00");
    assert_eq!(body.display.total_impressions, "1000");
    assert_eq!(body.display.deductions, "₹101.00");
    assert_eq!(body.display.net_revenue, "₹1899.00");
}

#[actix_web::test]
async fn test_blank_form_returns_zeros() {
    let (state, _) = test_state(Currency::INR);
    let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/calculations")
        .set_json(blank_payload())
        .to_request();
    let body: CalculationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.breakdown.per_type_revenue.len(), AdType::COUNT);
    assert_all_zero(&body.breakdown);
    assert_eq!(body.display.net_revenue, "₹0.00");
}

#[actix_web::test]
async fn test_request_currency_overrides_default() {
    let (state, _) = test_state(Currency::INR);
    let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

    let mut payload = pre_roll_payload();
    payload["currency"] = json!("USD");
    let req = test::TestRequest::post()
        .uri("/api/v1/calculations")
        .set_json(payload)
        .to_request();
    let body: CalculationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.currency, Currency::USD);
    assert_eq!(body.display.net_revenue, "$1899.00");
    assert_eq!(body.breakdown.net_revenue, dec!(1899));
}

#[actix_web::test]
async fn test_numeric_and_garbage_fields() {
    let (state, _) = test_state(Currency::USD);
    let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/calculations")
        .set_json(json!({
            "ad_items": {
                "Mid Roll": { "impressions": 500, "cpi": 1.5 },
                "Banner": { "impressions": "n/a", "cpi": null },
                "Interstitial": { "impressions": "9999", "cpi": "9" }
            }
        }))
        .to_request();
    let body: CalculationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.breakdown.revenue_for(AdType::MidRoll), dec!(750));
    assert_eq!(body.breakdown.revenue_for(AdType::Banner), Decimal::ZERO);
    assert_eq!(body.breakdown.gross_revenue, dec!(750));
    assert_eq!(body.breakdown.total_impressions, dec!(500));
}

#[actix_web::test]
async fn test_negative_cpi_passes_through() {
    let (state, _) = test_state(Currency::USD);
    let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/calculations")
        .set_json(json!({
            "ad_items": {
                "Pre Roll": { "impressions": "1000", "cpi": "2" },
                "Post Roll": { "impressions": "100", "cpi": "-3" }
            }
        }))
        .to_request();
    let body: CalculationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.breakdown.revenue_for(AdType::PostRoll), dec!(-300));
    assert_eq!(body.breakdown.gross_revenue, dec!(1700));
}

#[actix_web::test]
async fn test_malformed_body_is_rejected() {
    let (state, _) = test_state(Currency::USD);
    let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/calculations")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"ad_items\": [")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_unknown_currency_is_rejected() {
    let (state, _) = test_state(Currency::USD);
    let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

    let mut payload = pre_roll_payload();
    payload["currency"] = json!("EUR");
    let req = test::TestRequest::post()
        .uri("/api/v1/calculations")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_health_and_request_id() {
    let (state, _) = test_state(Currency::USD);
    let app = test::init_service(
        App::new()
            .wrap(RequestId)
            .app_data(state)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("X-Request-ID", "calc-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "calc-42");
}
