//! Request and response DTOs for each endpoint contract.
//!
//! # Design
//! These types mirror the backend's wire schema but are defined
//! independently of the mock-server crate; integration tests catch any
//! drift between the two. Wire names are camelCase, mapped via serde
//! renames. Optional request fields are omitted from the JSON entirely
//! when unset, never sent as `null`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request payload for `POST /new-endpoint`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    pub param1: String,
    pub param2: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_param: Option<bool>,
}

/// Response payload for `POST /new-endpoint`. `data` is a free-form
/// object the backend may or may not attach.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// One traveller on a booking. The wire field for the category is
/// `type` (adult, child, ...), which is a reserved word here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub passenger_type: String,
}

/// Request payload for `POST /user/book-journey`.
///
/// The booking endpoint promises no response schema; see
/// `ApiClient::parse_book_journey`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
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

/// A single user record inside [`UsersResponse`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Response payload for `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsersResponse {
    pub status: String,
    pub message: String,
    pub data: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_request_serializes_wire_names() {
        let input = FeatureRequest {
            param1: "TestValue".to_string(),
            param2: 123,
            optional_param: Some(true),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["param1"], "TestValue");
        assert_eq!(json["param2"], 123);
        assert_eq!(json["optionalParam"], true);
    }

    #[test]
    fn feature_request_omits_unset_optional() {
        let input = FeatureRequest {
            param1: "TestValue".to_string(),
            param2: 123,
            optional_param: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("optionalParam").is_none());
    }

    #[test]
    fn feature_response_roundtrips() {
        let raw = r#"{"success":true,"message":"ok","data":{"param1":"TestValue"}}"#;
        let decoded: FeatureResponse = serde_json::from_str(raw).unwrap();
        let encoded = serde_json::to_string(&decoded).unwrap();
        let again: FeatureResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, decoded);
    }

    #[test]
    fn feature_response_data_is_optional() {
        let decoded: FeatureResponse =
            serde_json::from_str(r#"{"success":false,"message":"rejected"}"#).unwrap();
        assert!(!decoded.success);
        assert!(decoded.data.is_none());
    }

    #[test]
    fn feature_response_rejects_missing_message() {
        let result: Result<FeatureResponse, _> = serde_json::from_str(r#"{"success":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn passenger_category_uses_type_on_the_wire() {
        let passenger = Passenger {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            passenger_type: "adult".to_string(),
        };
        let json = serde_json::to_value(&passenger).unwrap();
        assert_eq!(json["type"], "adult");
        assert!(json.get("passenger_type").is_none());
    }

    #[test]
    fn book_journey_request_serializes_camel_case() {
        let input = BookJourneyRequest {
            journey_id: Uuid::nil(),
            start_location: "Lisbon".to_string(),
            end_location: "Porto".to_string(),
            start_time: "2024-05-01T08:00:00Z".to_string(),
            end_time: "2024-05-01T11:00:00Z".to_string(),
            passengers: vec![Passenger {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                passenger_type: "adult".to_string(),
            }],
            card_id: "card-42".to_string(),
            total_amount: 2600,
            test_mode: true,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["journeyId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["startLocation"], "Lisbon");
        assert_eq!(json["endLocation"], "Porto");
        assert_eq!(json["totalAmount"], 2600);
        assert_eq!(json["testMode"], true);
        assert_eq!(json["passengers"][0]["type"], "adult");
    }

    #[test]
    fn users_response_roundtrips_preserving_order() {
        let raw = r#"{
            "status": "success",
            "message": "Users fetched successfully",
            "data": [
                {"id": 1, "name": "Alice", "email": "alice@example.com"},
                {"id": 2, "name": "Bob", "email": "bob@example.com"}
            ]
        }"#;
        let decoded: UsersResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.data.len(), 2);
        assert_eq!(decoded.data[0].name, "Alice");
        assert_eq!(decoded.data[1].name, "Bob");

        let encoded = serde_json::to_string(&decoded).unwrap();
        let again: UsersResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, decoded);
    }

    #[test]
    fn user_rejects_mistyped_id() {
        let result: Result<User, _> =
            serde_json::from_str(r#"{"id":"1","name":"Alice","email":"alice@example.com"}"#);
        assert!(result.is_err());
    }
}
