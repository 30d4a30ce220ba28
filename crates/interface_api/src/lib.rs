//! HTTP API Layer
//!
//! REST surface of the policy engine, built on Axum. Handlers are thin: they
//! decode the request DTO, call [`ClientService`] or
//! [`PolicyLifecycleService`], and encode the result. All business rules
//! live in `domain_policy`.
//!
//! # Routes
//!
//! | Method | Path                                 | Handler                          |
//! |--------|--------------------------------------|----------------------------------|
//! | GET    | `/health`                            | liveness                         |
//! | GET    | `/health/ready`                      | storage readiness                |
//! | POST   | `/api/clients`                       | register a client                |
//! | GET    | `/api/clients`                       | list clients                     |
//! | GET    | `/api/clients/:id`                   | client with its policies         |
//! | DELETE | `/api/clients/:id`                   | delete client and its policies   |
//! | GET    | `/api/clients/:id/policies`          | policies of a client             |
//! | POST   | `/api/clients/:id/policies`          | issue a policy                   |
//! | GET    | `/api/policies/:id`                  | get a policy                     |
//! | PUT    | `/api/policies/:id`                  | amend and reprice a policy       |
//! | POST   | `/api/calculate-premium?clientId=..` | price without issuing            |
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(clients, policies, Arc::new(SystemClock), config);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::Clock;
use domain_client::{ClientPort, ClientService};
use domain_policy::{PolicyLifecycleService, PolicyPort, PremiumService};

use crate::config::ApiConfig;
use crate::handlers::{clients, health, policies, premium};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: ClientService,
    pub policies: PolicyLifecycleService,
    pub client_port: Arc<dyn ClientPort>,
    pub policy_port: Arc<dyn PolicyPort>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the services over the given storage ports
    pub fn new(
        client_port: Arc<dyn ClientPort>,
        policy_port: Arc<dyn PolicyPort>,
        clock: Arc<dyn Clock>,
        config: ApiConfig,
    ) -> Self {
        Self {
            clients: ClientService::new(client_port.clone()),
            policies: PolicyLifecycleService::new(
                client_port.clone(),
                policy_port.clone(),
                PremiumService::new(clock),
            ),
            client_port,
            policy_port,
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_origin.clone());

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let client_routes = Router::new()
        .route("/", post(clients::create_client).get(clients::list_clients))
        .route("/:id", get(clients::get_client).delete(clients::delete_client))
        .route(
            "/:id/policies",
            get(clients::list_client_policies).post(clients::create_policy),
        );

    let policy_routes = Router::new().route(
        "/:id",
        get(policies::get_policy).put(policies::update_policy),
    );

    let api_routes = Router::new()
        .nest("/clients", client_routes)
        .nest("/policies", policy_routes)
        .route("/calculate-premium", post(premium::calculate_premium))
        .layer(axum_middleware::from_fn(request_logging));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
