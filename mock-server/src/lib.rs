use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    pub param1: String,
    pub param2: i64,
    #[serde(default)]
    pub optional_param: Option<bool>,
}

#[derive(Serialize)]
pub struct FeatureResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
pub struct Passenger {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub passenger_type: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookJourneyRequest {
    pub journey_id: Uuid,
    pub start_location: String,
    pub end_location: String,
    pub start_time: String,
    pub end_time: String,
    pub passengers: Vec<Passenger>,
    pub card_id: String,
    pub total_amount: i64,
    pub test_mode: bool,
}

#[derive(Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub status: String,
    pub message: String,
    pub data: Vec<User>,
}

type Users = Arc<Vec<User>>;

fn seeded_users() -> Users {
    Arc::new(vec![
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        },
    ])
}

pub fn app() -> Router {
    Router::new()
        .route("/new-endpoint", post(submit_feature))
        .route("/user/book-journey", post(book_journey))
        .route("/users", get(list_users))
        .with_state(seeded_users())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn submit_feature(Json(input): Json<FeatureRequest>) -> axum::response::Response {
    // Negative param2 simulates an upstream failure for client tests.
    if input.param2 < 0 {
        return (StatusCode::INTERNAL_SERVER_ERROR, "simulated upstream failure").into_response();
    }
    Json(FeatureResponse {
        success: true,
        message: "ok".to_string(),
        data: Some(json!({
            "param1": input.param1,
            "param2": input.param2,
            "optionalParam": input.optional_param,
        })),
    })
    .into_response()
}

async fn book_journey(Json(input): Json<BookJourneyRequest>) -> Json<serde_json::Value> {
    Json(json!({
        "reference": Uuid::new_v4(),
        "journeyId": input.journey_id,
        "passengerCount": input.passengers.len(),
        "totalAmount": input.total_amount,
        "status": if input.test_mode { "test-confirmed" } else { "confirmed" },
    }))
}

async fn list_users(State(users): State<Users>) -> Json<UsersResponse> {
    Json(UsersResponse {
        status: "success".to_string(),
        message: "Users fetched successfully".to_string(),
        data: users.to_vec(),
    })
}
