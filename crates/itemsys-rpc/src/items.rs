//! ItemServiceClient - ItemService over an RPC channel

use async_trait::async_trait;

use itemsys_core::models::{
    AcceptSwapRequest, AddItemCategoryRequest, AddItemRequest, AddRatingRequest,
    AddRecyclingCenterRequest, ChallengeParticipation, ChallengeProgress,
    CreateEcoChallengeRequest, CreateEcoTipRequest, EcoChallenge, EcoTip, EcoTipList,
    GetEcoTipsRequest, GetRatingsRequest, GetStatisticsRequest, Item, ItemCategory, ItemList,
    ItemRef, ListItemsRequest, ListSwapsRequest, ParticipateEcoChallengeRequest, Rating,
    RatingList, RecyclingCenter, RecyclingCenterList, RecyclingSubmission, RejectSwapRequest,
    SearchItemsRequest, SearchRecyclingCentersRequest, SendSwapRequest, StatusMessage,
    Statistics, SubmitRecyclingRequest, Swap, SwapList, UpdateChallengeProgressRequest,
    UpdateItemRequest,
};
use itemsys_core::{CallContext, ItemService, ServiceResult};

use crate::channel::{InvalidEndpoint, RpcChannel};

/// Client half of the item service; shared by all requests.
#[derive(Debug, Clone)]
pub struct ItemServiceClient {
    channel: RpcChannel,
}

impl ItemServiceClient {
    pub fn connect(endpoint: &str) -> Result<Self, InvalidEndpoint> {
        Ok(Self {
            channel: RpcChannel::connect("ItemService", endpoint)?,
        })
    }
}

#[async_trait]
impl ItemService for ItemServiceClient {
    async fn add_item(&self, ctx: &CallContext, req: AddItemRequest) -> ServiceResult<Item> {
        self.channel.call(ctx, "AddItem", &req).await
    }

    async fn update_item(&self, ctx: &CallContext, req: UpdateItemRequest) -> ServiceResult<Item> {
        self.channel.call(ctx, "UpdateItem", &req).await
    }

    async fn delete_item(&self, ctx: &CallContext, req: ItemRef) -> ServiceResult<StatusMessage> {
        self.channel.call(ctx, "DeleteItem", &req).await
    }

    async fn get_item(&self, ctx: &CallContext, req: ItemRef) -> ServiceResult<Item> {
        self.channel.call(ctx, "GetItem", &req).await
    }

    async fn list_items(
        &self,
        ctx: &CallContext,
        req: ListItemsRequest,
    ) -> ServiceResult<ItemList> {
        self.channel.call(ctx, "ListItems", &req).await
    }

    async fn search_items(
        &self,
        ctx: &CallContext,
        req: SearchItemsRequest,
    ) -> ServiceResult<ItemList> {
        self.channel.call(ctx, "SearchItems", &req).await
    }

    async fn add_item_category(
        &self,
        ctx: &CallContext,
        req: AddItemCategoryRequest,
    ) -> ServiceResult<ItemCategory> {
        self.channel.call(ctx, "AddItemCategory", &req).await
    }

    async fn create_eco_challenge(
        &self,
        ctx: &CallContext,
        req: CreateEcoChallengeRequest,
    ) -> ServiceResult<EcoChallenge> {
        self.channel.call(ctx, "CreateEcoChallenge", &req).await
    }

    async fn participate_eco_challenge(
        &self,
        ctx: &CallContext,
        req: ParticipateEcoChallengeRequest,
    ) -> ServiceResult<ChallengeParticipation> {
        self.channel.call(ctx, "ParticipateEcoChallenge", &req).await
    }

    async fn update_eco_challenge_progress(
        &self,
        ctx: &CallContext,
        req: UpdateChallengeProgressRequest,
    ) -> ServiceResult<ChallengeProgress> {
        self.channel
            .call(ctx, "UpdateEcoChallengeProgress", &req)
            .await
    }

    async fn create_eco_tip(
        &self,
        ctx: &CallContext,
        req: CreateEcoTipRequest,
    ) -> ServiceResult<EcoTip> {
        self.channel.call(ctx, "CreateEcoTip", &req).await
    }

    async fn get_eco_tips(
        &self,
        ctx: &CallContext,
        req: GetEcoTipsRequest,
    ) -> ServiceResult<EcoTipList> {
        self.channel.call(ctx, "GetEcoTips", &req).await
    }

    async fn add_rating(&self, ctx: &CallContext, req: AddRatingRequest) -> ServiceResult<Rating> {
        self.channel.call(ctx, "AddRating", &req).await
    }

    async fn get_ratings(
        &self,
        ctx: &CallContext,
        req: GetRatingsRequest,
    ) -> ServiceResult<RatingList> {
        self.channel.call(ctx, "GetRatings", &req).await
    }

    async fn add_recycling_center(
        &self,
        ctx: &CallContext,
        req: AddRecyclingCenterRequest,
    ) -> ServiceResult<RecyclingCenter> {
        self.channel.call(ctx, "AddRecyclingCenter", &req).await
    }

    async fn search_recycling_centers(
        &self,
        ctx: &CallContext,
        req: SearchRecyclingCentersRequest,
    ) -> ServiceResult<RecyclingCenterList> {
        self.channel.call(ctx, "SearchRecyclingCenters", &req).await
    }

    async fn submit_items_for_recycling(
        &self,
        ctx: &CallContext,
        req: SubmitRecyclingRequest,
    ) -> ServiceResult<RecyclingSubmission> {
        self.channel
            .call(ctx, "SubmitItemsForRecycling", &req)
            .await
    }

    async fn get_statistics(
        &self,
        ctx: &CallContext,
        req: GetStatisticsRequest,
    ) -> ServiceResult<Statistics> {
        self.channel.call(ctx, "Statistics", &req).await
    }

    async fn send_swap_request(
        &self,
        ctx: &CallContext,
        req: SendSwapRequest,
    ) -> ServiceResult<Swap> {
        self.channel.call(ctx, "SendSwapRequest", &req).await
    }

    async fn accept_swap_request(
        &self,
        ctx: &CallContext,
        req: AcceptSwapRequest,
    ) -> ServiceResult<Swap> {
        self.channel.call(ctx, "AcceptSwapRequest", &req).await
    }

    async fn reject_swap_request(
        &self,
        ctx: &CallContext,
        req: RejectSwapRequest,
    ) -> ServiceResult<Swap> {
        self.channel.call(ctx, "RejectSwapRequest", &req).await
    }

    async fn list_swap_requests(
        &self,
        ctx: &CallContext,
        req: ListSwapsRequest,
    ) -> ServiceResult<SwapList> {
        self.channel.call(ctx, "ListSwapRequests", &req).await
    }
}
