//! HTTP API tests
//!
//! Drives the full router over the in-memory ports with a fixed clock of
//! 2024-06-01.
//!
//! # Test Organization
//!
//! - `clients`: registration, listing, detail view and deletion
//! - `policies`: issuance, lookup and amendment
//! - `premium`: the quote endpoint
//! - `health`: liveness and readiness

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use core_kernel::FixedClock;
use domain_client::MockClientPort;
use domain_policy::MockPolicyPort;
use interface_api::{config::ApiConfig, create_router, AppState};

fn app() -> Router {
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    let state = AppState::new(
        Arc::new(MockClientPort::new()),
        Arc::new(MockPolicyPort::new()),
        Arc::new(clock),
        ApiConfig::default(),
    );
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn client_body() -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "dateOfBirth": "1980-01-01",
        "annualIncome": 60000.0
    })
}

fn term_life_body() -> Value {
    json!({
        "policyType": "TERM_LIFE",
        "coverageAmount": 100000.0,
        "startDate": "2024-01-01",
        "termYears": 20,
        "beneficiaryName": "John Doe",
        "beneficiaryRelation": "SPOUSE"
    })
}

async fn create_client(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/clients", Some(client_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

// ============================================================================
// Clients
// ============================================================================

mod clients {
    use super::*;

    #[tokio::test]
    async fn test_create_and_list() {
        let app = app();
        let id = create_client(&app).await;

        let (status, body) = send(&app, "GET", "/api/clients", None).await;
        assert_eq!(status, StatusCode::OK);
        let clients = body.as_array().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0]["id"], id);
        assert_eq!(clients[0]["firstName"], "Jane");
        assert_eq!(clients[0]["dateOfBirth"], "1980-01-01");
    }

    #[tokio::test]
    async fn test_missing_first_name_is_rejected() {
        let app = app();
        let mut body = client_body();
        body["firstName"] = json!("  ");

        let (status, body) = send(&app, "POST", "/api/clients", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "firstName");
        assert_eq!(body["message"], "First name is required");
    }

    #[tokio::test]
    async fn test_overlong_field_is_rejected() {
        let app = app();
        let mut body = client_body();
        body["lastName"] = json!("x".repeat(101));

        let (status, body) = send(&app, "POST", "/api/clients", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "last_name");
    }

    #[tokio::test]
    async fn test_detail_includes_policies() {
        let app = app();
        let id = create_client(&app).await;
        let uri = format!("/api/clients/{id}/policies");
        send(&app, "POST", &uri, Some(term_life_body())).await;

        let (status, body) = send(&app, "GET", &format!("/api/clients/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "jane@example.com");
        assert_eq!(body["policies"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_client_is_404() {
        let app = app();
        let uri = format!("/api/clients/{}", uuid::Uuid::new_v4());

        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_delete() {
        let app = app();
        let id = create_client(&app).await;
        let uri = format!("/api/clients/{id}");

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Policies
// ============================================================================

mod policies {
    use super::*;

    #[tokio::test]
    async fn test_issue_term_life() {
        let app = app();
        let id = create_client(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/clients/{id}/policies"),
            Some(term_life_body()),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["clientId"], id);
        assert_eq!(body["policyType"], "TERM_LIFE");
        assert_eq!(body["endDate"], "2044-01-01");
        assert_eq!(body["premiumDisplay"], "294.53");
        let premium = body["premiumAmount"].as_f64().unwrap();
        assert!((premium - 294.5333333).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_validation_failure_names_field() {
        let app = app();
        let id = create_client(&app).await;
        let mut body = term_life_body();
        body["beneficiaryRelation"] = json!("");

        let (status, body) =
            send(&app, "POST", &format!("/api/clients/{id}/policies"), Some(body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "beneficiaryRelation");
        assert_eq!(body["message"], "Beneficiary relation is required");
    }

    #[tokio::test]
    async fn test_issue_for_unknown_client_is_404() {
        let app = app();
        let uri = format!("/api/clients/{}/policies", uuid::Uuid::new_v4());

        let (status, _) = send(&app, "POST", &uri, Some(term_life_body())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_and_list() {
        let app = app();
        let id = create_client(&app).await;
        let (_, created) = send(
            &app,
            "POST",
            &format!("/api/clients/{id}/policies"),
            Some(term_life_body()),
        )
        .await;
        let policy_id = created["id"].as_str().unwrap();

        let (status, body) = send(&app, "GET", &format!("/api/policies/{policy_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["beneficiaryName"], "John Doe");

        let (status, body) =
            send(&app, "GET", &format!("/api/clients/{id}/policies"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_reprices() {
        let app = app();
        let id = create_client(&app).await;
        let (_, created) = send(
            &app,
            "POST",
            &format!("/api/clients/{id}/policies"),
            Some(term_life_body()),
        )
        .await;
        let uri = format!("/api/policies/{}", created["id"].as_str().unwrap());

        let (status, body) =
            send(&app, "PUT", &uri, Some(json!({ "coverageAmount": 200000.0 }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["coverageAmount"], 200000.0);
        assert!(body["premiumAmount"].as_f64().unwrap() > created["premiumAmount"].as_f64().unwrap());
        assert_eq!(body["endDate"], "2044-01-01");
    }

    #[tokio::test]
    async fn test_update_unknown_policy_is_404() {
        let app = app();
        let uri = format!("/api/policies/{}", uuid::Uuid::new_v4());

        let (status, _) = send(&app, "PUT", &uri, Some(json!({ "termYears": 10 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Premium quotes
// ============================================================================

mod premium {
    use super::*;

    #[tokio::test]
    async fn test_quote_does_not_issue() {
        let app = app();
        let id = create_client(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/calculate-premium?clientId={id}"),
            Some(term_life_body()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["clientId"], id);
        assert_eq!(body["premiumDisplay"], "294.53");

        let (_, policies) = send(&app, "GET", &format!("/api/clients/{id}/policies"), None).await;
        assert!(policies.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quote_validates_application() {
        let app = app();
        let id = create_client(&app).await;
        let mut body = term_life_body();
        body["policyType"] = json!("PET");

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/calculate-premium?clientId={id}"),
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "policyType");
    }
}

// ============================================================================
// Health
// ============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_adapters() {
        let (status, body) = send(&app(), "GET", "/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["adapters"].as_array().unwrap().len(), 2);
    }
}
