//! Test support for the item-system gateway
//!
//! Programmable stub implementations of the backend service traits. Each
//! stub records every call it receives (operation name plus the bound
//! request as JSON) and applies one scripted behavior to all operations,
//! which is enough to drive the dispatch-layer properties end to end
//! without a network dependency.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use itemsys_core::models::{
    AcceptSwapRequest, AddEcoPointsRequest, AddItemCategoryRequest, AddItemRequest,
    AddRatingRequest, AddRecyclingCenterRequest, ChallengeParticipation, ChallengeProgress,
    CreateEcoChallengeRequest, CreateEcoTipRequest, EcoChallenge, EcoPoints, EcoPointsHistory,
    EcoPointsHistoryRequest, EcoTip, EcoTipList, GetEcoTipsRequest, GetRatingsRequest,
    GetStatisticsRequest, GetUsersRequest, Item, ItemCategory, ItemList, ItemRef,
    ListItemsRequest, ListSwapsRequest, ParticipateEcoChallengeRequest, Rating, RatingList,
    RecyclingCenter, RecyclingCenterList, RecyclingSubmission, RejectSwapRequest,
    SearchItemsRequest, SearchRecyclingCentersRequest, SendSwapRequest, StatusMessage,
    Statistics, SubmitRecyclingRequest, Swap, SwapList, UpdateChallengeProgressRequest,
    UpdateItemRequest, UpdateUserProfileRequest, UserList, UserProfile, UserRef,
};
use itemsys_core::{CallContext, ItemService, ServiceError, ServiceResult, UserService};

/// Scripted behavior applied to every call on a stub service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubBehavior {
    /// Answer normally
    Ok,
    /// Fail with a not-found error
    NotFound,
    /// Fail with an invalid-argument error
    InvalidArgument,
    /// Fail as unreachable
    Unavailable,
    /// Fail with a generic internal error
    Internal,
    /// Sleep this long before answering
    Delay(Duration),
    /// Never answer; the caller's deadline has to cut the call off
    Hang,
}

fn record<T: Serialize>(seen: &Mutex<Vec<(String, Value)>>, op: &str, req: &T) {
    let value = serde_json::to_value(req).expect("stub request serializes");
    seen.lock().unwrap().push((op.to_string(), value));
}

async fn apply(behavior: StubBehavior, op: &str) -> ServiceResult<()> {
    match behavior {
        StubBehavior::Ok => Ok(()),
        StubBehavior::NotFound => Err(ServiceError::NotFound(format!("{}: no such entity", op))),
        StubBehavior::InvalidArgument => {
            Err(ServiceError::InvalidArgument(format!("{}: rejected", op)))
        }
        StubBehavior::Unavailable => Err(ServiceError::Unavailable(format!(
            "{}: connection refused",
            op
        ))),
        StubBehavior::Internal => Err(ServiceError::Internal(format!("{}: boom", op))),
        StubBehavior::Delay(wait) => {
            tokio::time::sleep(wait).await;
            Ok(())
        }
        StubBehavior::Hang => std::future::pending().await,
    }
}

// =============================================================================
// User service stub
// =============================================================================

pub struct StubUserService {
    behavior: Mutex<StubBehavior>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, Value)>>,
    profile: Mutex<UserProfile>,
}

impl StubUserService {
    pub fn new() -> Self {
        Self {
            behavior: Mutex::new(StubBehavior::Ok),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            profile: Mutex::new(UserProfile {
                user_id: "u-1".to_string(),
                username: "ann".to_string(),
                email: None,
                full_name: None,
                bio: None,
                eco_points: Some(0),
                created_at: None,
            }),
        }
    }

    pub fn set_behavior(&self, behavior: StubBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn set_profile(&self, profile: UserProfile) {
        *self.profile.lock().unwrap() = profile;
    }

    /// Total number of operations invoked on this stub
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every recorded (operation, request) pair, oldest first
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.seen.lock().unwrap().clone()
    }

    /// The most recent request recorded for `op`
    pub fn last_request(&self, op: &str) -> Option<Value> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(name, _)| name == op)
            .map(|(_, value)| value.clone())
    }

    async fn enter<T: Serialize>(&self, op: &str, req: &T) -> ServiceResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        record(&self.seen, op, req);
        let behavior = *self.behavior.lock().unwrap();
        apply(behavior, op).await
    }

    fn profile(&self) -> UserProfile {
        self.profile.lock().unwrap().clone()
    }
}

impl Default for StubUserService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserService for StubUserService {
    async fn get_user_profile(
        &self,
        _ctx: &CallContext,
        req: UserRef,
    ) -> ServiceResult<UserProfile> {
        self.enter("GetUserProfile", &req).await?;
        let mut profile = self.profile();
        profile.user_id = req.user_id;
        Ok(profile)
    }

    async fn update_user_profile(
        &self,
        _ctx: &CallContext,
        req: UpdateUserProfileRequest,
    ) -> ServiceResult<UserProfile> {
        self.enter("UpdateUserProfile", &req).await?;
        let mut profile = self.profile();
        profile.user_id = req.user_id;
        if let Some(username) = req.username {
            profile.username = username;
        }
        Ok(profile)
    }

    async fn delete_user(&self, _ctx: &CallContext, req: UserRef) -> ServiceResult<StatusMessage> {
        self.enter("DeleteUser", &req).await?;
        Ok(StatusMessage::new("user deleted"))
    }

    async fn get_users(
        &self,
        _ctx: &CallContext,
        req: GetUsersRequest,
    ) -> ServiceResult<UserList> {
        self.enter("GetUsers", &req).await?;
        Ok(UserList {
            users: vec![self.profile()],
            total: Some(1),
        })
    }

    async fn get_eco_points(&self, _ctx: &CallContext, req: UserRef) -> ServiceResult<EcoPoints> {
        self.enter("GetEcoPoints", &req).await?;
        Ok(EcoPoints {
            user_id: req.user_id,
            points: 120,
        })
    }

    async fn add_eco_points(
        &self,
        _ctx: &CallContext,
        req: AddEcoPointsRequest,
    ) -> ServiceResult<EcoPoints> {
        self.enter("AddEcoPoints", &req).await?;
        Ok(EcoPoints {
            user_id: req.user_id,
            points: req.points,
        })
    }

    async fn get_eco_points_history(
        &self,
        _ctx: &CallContext,
        req: EcoPointsHistoryRequest,
    ) -> ServiceResult<EcoPointsHistory> {
        self.enter("GetEcoPointsHistory", &req).await?;
        Ok(EcoPointsHistory {
            user_id: req.user_id,
            entries: vec![],
        })
    }
}

// =============================================================================
// Item service stub
// =============================================================================

pub struct StubItemService {
    behavior: Mutex<StubBehavior>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, Value)>>,
}

impl StubItemService {
    pub fn new() -> Self {
        Self {
            behavior: Mutex::new(StubBehavior::Ok),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn set_behavior(&self, behavior: StubBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    /// Total number of operations invoked on this stub
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every recorded (operation, request) pair, oldest first
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.seen.lock().unwrap().clone()
    }

    /// The most recent request recorded for `op`
    pub fn last_request(&self, op: &str) -> Option<Value> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(name, _)| name == op)
            .map(|(_, value)| value.clone())
    }

    async fn enter<T: Serialize>(&self, op: &str, req: &T) -> ServiceResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        record(&self.seen, op, req);
        let behavior = *self.behavior.lock().unwrap();
        apply(behavior, op).await
    }

    fn item(&self, item_id: impl Into<String>) -> Item {
        Item {
            item_id: item_id.into(),
            name: "bicycle".to_string(),
            owner_id: "u-1".to_string(),
            description: None,
            category_id: None,
            condition: Some("used".to_string()),
            status: Some("available".to_string()),
            created_at: None,
        }
    }

    fn swap(&self, swap_id: impl Into<String>, status: &str) -> Swap {
        Swap {
            swap_id: swap_id.into(),
            offered_item_id: "i-1".to_string(),
            requested_item_id: "i-2".to_string(),
            from_user_id: "u-1".to_string(),
            to_user_id: "u-2".to_string(),
            status: status.to_string(),
            message: None,
        }
    }
}

impl Default for StubItemService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemService for StubItemService {
    async fn add_item(&self, _ctx: &CallContext, req: AddItemRequest) -> ServiceResult<Item> {
        self.enter("AddItem", &req).await?;
        let mut item = self.item("i-1");
        item.name = req.name;
        item.owner_id = req.owner_id;
        Ok(item)
    }

    async fn update_item(
        &self,
        _ctx: &CallContext,
        req: UpdateItemRequest,
    ) -> ServiceResult<Item> {
        self.enter("UpdateItem", &req).await?;
        Ok(self.item(req.item_id))
    }

    async fn delete_item(&self, _ctx: &CallContext, req: ItemRef) -> ServiceResult<StatusMessage> {
        self.enter("DeleteItem", &req).await?;
        Ok(StatusMessage::new("item deleted"))
    }

    async fn get_item(&self, _ctx: &CallContext, req: ItemRef) -> ServiceResult<Item> {
        self.enter("GetItem", &req).await?;
        Ok(self.item(req.item_id))
    }

    async fn list_items(
        &self,
        _ctx: &CallContext,
        req: ListItemsRequest,
    ) -> ServiceResult<ItemList> {
        self.enter("ListItems", &req).await?;
        Ok(ItemList {
            items: vec![self.item("i-1")],
            total: Some(1),
        })
    }

    async fn search_items(
        &self,
        _ctx: &CallContext,
        req: SearchItemsRequest,
    ) -> ServiceResult<ItemList> {
        self.enter("SearchItems", &req).await?;
        Ok(ItemList {
            items: vec![],
            total: Some(0),
        })
    }

    async fn add_item_category(
        &self,
        _ctx: &CallContext,
        req: AddItemCategoryRequest,
    ) -> ServiceResult<ItemCategory> {
        self.enter("AddItemCategory", &req).await?;
        Ok(ItemCategory {
            category_id: "c-1".to_string(),
            name: req.name,
            description: req.description,
        })
    }

    async fn create_eco_challenge(
        &self,
        _ctx: &CallContext,
        req: CreateEcoChallengeRequest,
    ) -> ServiceResult<EcoChallenge> {
        self.enter("CreateEcoChallenge", &req).await?;
        Ok(EcoChallenge {
            challenge_id: "ch-1".to_string(),
            title: req.title,
            description: req.description,
            reward_points: req.reward_points,
            start_date: req.start_date,
            end_date: req.end_date,
        })
    }

    async fn participate_eco_challenge(
        &self,
        _ctx: &CallContext,
        req: ParticipateEcoChallengeRequest,
    ) -> ServiceResult<ChallengeParticipation> {
        self.enter("ParticipateEcoChallenge", &req).await?;
        Ok(ChallengeParticipation {
            challenge_id: req.challenge_id,
            user_id: req.user_id,
            status: "joined".to_string(),
        })
    }

    async fn update_eco_challenge_progress(
        &self,
        _ctx: &CallContext,
        req: UpdateChallengeProgressRequest,
    ) -> ServiceResult<ChallengeProgress> {
        self.enter("UpdateEcoChallengeProgress", &req).await?;
        Ok(ChallengeProgress {
            challenge_id: req.challenge_id,
            user_id: req.user_id,
            progress: req.progress,
            completed: req.progress >= 100,
        })
    }

    async fn create_eco_tip(
        &self,
        _ctx: &CallContext,
        req: CreateEcoTipRequest,
    ) -> ServiceResult<EcoTip> {
        self.enter("CreateEcoTip", &req).await?;
        Ok(EcoTip {
            tip_id: "t-1".to_string(),
            title: req.title,
            content: req.content,
        })
    }

    async fn get_eco_tips(
        &self,
        _ctx: &CallContext,
        req: GetEcoTipsRequest,
    ) -> ServiceResult<EcoTipList> {
        self.enter("GetEcoTips", &req).await?;
        Ok(EcoTipList { tips: vec![] })
    }

    async fn add_rating(
        &self,
        _ctx: &CallContext,
        req: AddRatingRequest,
    ) -> ServiceResult<Rating> {
        self.enter("AddRating", &req).await?;
        Ok(Rating {
            rating_id: "r-1".to_string(),
            user_id: req.user_id,
            rater_id: req.rater_id,
            score: req.score,
            comment: req.comment,
        })
    }

    async fn get_ratings(
        &self,
        _ctx: &CallContext,
        req: GetRatingsRequest,
    ) -> ServiceResult<RatingList> {
        self.enter("GetRatings", &req).await?;
        Ok(RatingList {
            ratings: vec![],
            average: None,
        })
    }

    async fn add_recycling_center(
        &self,
        _ctx: &CallContext,
        req: AddRecyclingCenterRequest,
    ) -> ServiceResult<RecyclingCenter> {
        self.enter("AddRecyclingCenter", &req).await?;
        Ok(RecyclingCenter {
            center_id: "rc-1".to_string(),
            name: req.name,
            address: req.address,
            city: req.city,
            accepted_materials: req.accepted_materials,
            working_hours: req.working_hours,
        })
    }

    async fn search_recycling_centers(
        &self,
        _ctx: &CallContext,
        req: SearchRecyclingCentersRequest,
    ) -> ServiceResult<RecyclingCenterList> {
        self.enter("SearchRecyclingCenters", &req).await?;
        Ok(RecyclingCenterList { centers: vec![] })
    }

    async fn submit_items_for_recycling(
        &self,
        _ctx: &CallContext,
        req: SubmitRecyclingRequest,
    ) -> ServiceResult<RecyclingSubmission> {
        self.enter("SubmitItemsForRecycling", &req).await?;
        Ok(RecyclingSubmission {
            submission_id: "s-1".to_string(),
            user_id: req.user_id,
            center_id: req.center_id,
            item_ids: req.item_ids,
            awarded_points: Some(10),
        })
    }

    async fn get_statistics(
        &self,
        _ctx: &CallContext,
        req: GetStatisticsRequest,
    ) -> ServiceResult<Statistics> {
        self.enter("Statistics", &req).await?;
        Ok(Statistics::default())
    }

    async fn send_swap_request(
        &self,
        _ctx: &CallContext,
        req: SendSwapRequest,
    ) -> ServiceResult<Swap> {
        self.enter("SendSwapRequest", &req).await?;
        let mut swap = self.swap("sw-1", "pending");
        swap.offered_item_id = req.offered_item_id;
        swap.requested_item_id = req.requested_item_id;
        swap.from_user_id = req.from_user_id;
        swap.to_user_id = req.to_user_id;
        swap.message = req.message;
        Ok(swap)
    }

    async fn accept_swap_request(
        &self,
        _ctx: &CallContext,
        req: AcceptSwapRequest,
    ) -> ServiceResult<Swap> {
        self.enter("AcceptSwapRequest", &req).await?;
        Ok(self.swap(req.swap_id, "accepted"))
    }

    async fn reject_swap_request(
        &self,
        _ctx: &CallContext,
        req: RejectSwapRequest,
    ) -> ServiceResult<Swap> {
        self.enter("RejectSwapRequest", &req).await?;
        Ok(self.swap(req.swap_id, "rejected"))
    }

    async fn list_swap_requests(
        &self,
        _ctx: &CallContext,
        req: ListSwapsRequest,
    ) -> ServiceResult<SwapList> {
        self.enter("ListSwapRequests", &req).await?;
        let swaps = match req.swap_id {
            Some(swap_id) => vec![self.swap(swap_id, "pending")],
            None => vec![],
        };
        Ok(SwapList { swaps })
    }
}
