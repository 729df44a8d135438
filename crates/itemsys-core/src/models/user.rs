//! User service models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a user by id. Routes without a body bind this purely from
/// the `user_id` path segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub user_id: String,
}

/// A user profile as the user service reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier for this user
    pub user_id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Accumulated eco points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eco_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Profile update. The `user_id` always comes from the URL; a value in the
/// body is overwritten during binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserProfileRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Filter for listing users
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetUsersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Page of users matching a filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// Eco-point balance of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoPoints {
    pub user_id: String,
    pub points: i64,
}

/// Credit eco points to a user. `user_id` comes from the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEcoPointsRequest {
    #[serde(default)]
    pub user_id: String,
    pub points: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Filter for a user's eco-point history. `user_id` comes from the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoPointsHistoryRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// One eco-point ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoPointsEntry {
    pub points: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Eco-point history of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoPointsHistory {
    pub user_id: String,
    pub entries: Vec<EcoPointsEntry>,
}
