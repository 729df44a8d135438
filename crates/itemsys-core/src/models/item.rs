//! Item service models: items, categories, challenges, tips, ratings,
//! recycling, statistics and swaps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Items
// =============================================================================

/// Reference to an item by id. Routes without a body bind this purely from
/// the `item_id` path segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRef {
    pub item_id: String,
}

/// A listed item as the item service reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub name: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Physical condition (e.g. "new", "used")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Listing status (e.g. "available", "swapped")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Item update. The `item_id` always comes from the URL; a value in the
/// body is overwritten during binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItemsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchItemsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Page of items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

// =============================================================================
// Categories
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemCategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCategory {
    pub category_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Eco challenges and tips
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEcoChallengeRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Points credited on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoChallenge {
    pub challenge_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipateEcoChallengeRequest {
    pub challenge_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeParticipation {
    pub challenge_id: String,
    pub user_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChallengeProgressRequest {
    pub challenge_id: String,
    pub user_id: String,
    /// Completion percentage, 0-100
    pub progress: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeProgress {
    pub challenge_id: String,
    pub user_id: String,
    pub progress: i64,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEcoTipRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoTip {
    pub tip_id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetEcoTipsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoTipList {
    pub tips: Vec<EcoTip>,
}

// =============================================================================
// Ratings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRatingRequest {
    /// User being rated
    pub user_id: String,
    /// User giving the rating
    pub rater_id: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub rating_id: String,
    pub user_id: String,
    pub rater_id: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRatingsRequest {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingList {
    pub ratings: Vec<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

// =============================================================================
// Recycling
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRecyclingCenterRequest {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default)]
    pub accepted_materials: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecyclingCenter {
    pub center_id: String,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default)]
    pub accepted_materials: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecyclingCenterList {
    pub centers: Vec<RecyclingCenter>,
}

/// Search criteria; bound from the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRecyclingCentersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

/// Recycling drop-off. `user_id` and `center_id` may arrive via the query
/// string; the item list rides in an optional JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitRecyclingRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub center_id: String,
    #[serde(default)]
    pub item_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecyclingSubmission {
    pub submission_id: String,
    pub user_id: String,
    pub center_id: String,
    #[serde(default)]
    pub item_ids: Vec<String>,
    /// Eco points credited for the drop-off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awarded_points: Option<i64>,
}

// =============================================================================
// Statistics
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetStatisticsRequest {
    /// Restrict to one user; platform-wide when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_items: i64,
    pub total_swaps: i64,
    pub total_recycled: i64,
    pub eco_points_awarded: i64,
}

// =============================================================================
// Swaps
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendSwapRequest {
    pub offered_item_id: String,
    pub requested_item_id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A swap negotiation between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swap {
    pub swap_id: String,
    pub offered_item_id: String,
    pub requested_item_id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    /// Negotiation state (e.g. "pending", "accepted", "rejected")
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptSwapRequest {
    pub swap_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectSwapRequest {
    pub swap_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Swap listing filter. The `swap_id` path segment, when present,
/// restricts the listing to that single negotiation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSwapsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapList {
    pub swaps: Vec<Swap>,
}
