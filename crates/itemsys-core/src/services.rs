//! Service traits - the typed call surfaces of the two backend RPC services.
//!
//! Each method is one backend operation. The REST layer only ever talks to
//! these traits, which is what lets tests substitute stub backends without
//! a network dependency. Implementations must be safe to share across all
//! in-flight requests.

use async_trait::async_trait;

use crate::context::CallContext;
use crate::error::ServiceResult;
use crate::models::{
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

/// Operations served by the user service.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_user_profile(&self, ctx: &CallContext, req: UserRef)
        -> ServiceResult<UserProfile>;

    async fn update_user_profile(
        &self,
        ctx: &CallContext,
        req: UpdateUserProfileRequest,
    ) -> ServiceResult<UserProfile>;

    async fn delete_user(&self, ctx: &CallContext, req: UserRef) -> ServiceResult<StatusMessage>;

    async fn get_users(&self, ctx: &CallContext, req: GetUsersRequest) -> ServiceResult<UserList>;

    async fn get_eco_points(&self, ctx: &CallContext, req: UserRef) -> ServiceResult<EcoPoints>;

    async fn add_eco_points(
        &self,
        ctx: &CallContext,
        req: AddEcoPointsRequest,
    ) -> ServiceResult<EcoPoints>;

    async fn get_eco_points_history(
        &self,
        ctx: &CallContext,
        req: EcoPointsHistoryRequest,
    ) -> ServiceResult<EcoPointsHistory>;
}

/// Operations served by the item/commerce service.
#[async_trait]
pub trait ItemService: Send + Sync {
    // Items
    async fn add_item(&self, ctx: &CallContext, req: AddItemRequest) -> ServiceResult<Item>;

    async fn update_item(&self, ctx: &CallContext, req: UpdateItemRequest) -> ServiceResult<Item>;

    async fn delete_item(&self, ctx: &CallContext, req: ItemRef) -> ServiceResult<StatusMessage>;

    async fn get_item(&self, ctx: &CallContext, req: ItemRef) -> ServiceResult<Item>;

    async fn list_items(&self, ctx: &CallContext, req: ListItemsRequest)
        -> ServiceResult<ItemList>;

    async fn search_items(
        &self,
        ctx: &CallContext,
        req: SearchItemsRequest,
    ) -> ServiceResult<ItemList>;

    // Categories
    async fn add_item_category(
        &self,
        ctx: &CallContext,
        req: AddItemCategoryRequest,
    ) -> ServiceResult<ItemCategory>;

    // Eco challenges and tips
    async fn create_eco_challenge(
        &self,
        ctx: &CallContext,
        req: CreateEcoChallengeRequest,
    ) -> ServiceResult<EcoChallenge>;

    async fn participate_eco_challenge(
        &self,
        ctx: &CallContext,
        req: ParticipateEcoChallengeRequest,
    ) -> ServiceResult<ChallengeParticipation>;

    async fn update_eco_challenge_progress(
        &self,
        ctx: &CallContext,
        req: UpdateChallengeProgressRequest,
    ) -> ServiceResult<ChallengeProgress>;

    async fn create_eco_tip(
        &self,
        ctx: &CallContext,
        req: CreateEcoTipRequest,
    ) -> ServiceResult<EcoTip>;

    async fn get_eco_tips(
        &self,
        ctx: &CallContext,
        req: GetEcoTipsRequest,
    ) -> ServiceResult<EcoTipList>;

    // Ratings
    async fn add_rating(&self, ctx: &CallContext, req: AddRatingRequest) -> ServiceResult<Rating>;

    async fn get_ratings(
        &self,
        ctx: &CallContext,
        req: GetRatingsRequest,
    ) -> ServiceResult<RatingList>;

    // Recycling
    async fn add_recycling_center(
        &self,
        ctx: &CallContext,
        req: AddRecyclingCenterRequest,
    ) -> ServiceResult<RecyclingCenter>;

    async fn search_recycling_centers(
        &self,
        ctx: &CallContext,
        req: SearchRecyclingCentersRequest,
    ) -> ServiceResult<RecyclingCenterList>;

    async fn submit_items_for_recycling(
        &self,
        ctx: &CallContext,
        req: SubmitRecyclingRequest,
    ) -> ServiceResult<RecyclingSubmission>;

    // Statistics
    async fn get_statistics(
        &self,
        ctx: &CallContext,
        req: GetStatisticsRequest,
    ) -> ServiceResult<Statistics>;

    // Swaps
    async fn send_swap_request(&self, ctx: &CallContext, req: SendSwapRequest)
        -> ServiceResult<Swap>;

    async fn accept_swap_request(
        &self,
        ctx: &CallContext,
        req: AcceptSwapRequest,
    ) -> ServiceResult<Swap>;

    async fn reject_swap_request(
        &self,
        ctx: &CallContext,
        req: RejectSwapRequest,
    ) -> ServiceResult<Swap>;

    async fn list_swap_requests(
        &self,
        ctx: &CallContext,
        req: ListSwapsRequest,
    ) -> ServiceResult<SwapList>;
}
