//! UserServiceClient - UserService over an RPC channel

use async_trait::async_trait;

use itemsys_core::models::{
    AddEcoPointsRequest, EcoPoints, EcoPointsHistory, EcoPointsHistoryRequest, GetUsersRequest,
    StatusMessage, UpdateUserProfileRequest, UserList, UserProfile, UserRef,
};
use itemsys_core::{CallContext, ServiceResult, UserService};

use crate::channel::{InvalidEndpoint, RpcChannel};

/// Client half of the user service; shared by all requests.
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    channel: RpcChannel,
}

impl UserServiceClient {
    pub fn connect(endpoint: &str) -> Result<Self, InvalidEndpoint> {
        Ok(Self {
            channel: RpcChannel::connect("UserService", endpoint)?,
        })
    }
}

#[async_trait]
impl UserService for UserServiceClient {
    async fn get_user_profile(
        &self,
        ctx: &CallContext,
        req: UserRef,
    ) -> ServiceResult<UserProfile> {
        self.channel.call(ctx, "GetUserProfile", &req).await
    }

    async fn update_user_profile(
        &self,
        ctx: &CallContext,
        req: UpdateUserProfileRequest,
    ) -> ServiceResult<UserProfile> {
        self.channel.call(ctx, "UpdateUserProfile", &req).await
    }

    async fn delete_user(&self, ctx: &CallContext, req: UserRef) -> ServiceResult<StatusMessage> {
        self.channel.call(ctx, "DeleteUser", &req).await
    }

    async fn get_users(&self, ctx: &CallContext, req: GetUsersRequest) -> ServiceResult<UserList> {
        self.channel.call(ctx, "GetUsers", &req).await
    }

    async fn get_eco_points(&self, ctx: &CallContext, req: UserRef) -> ServiceResult<EcoPoints> {
        self.channel.call(ctx, "GetEcoPoints", &req).await
    }

    async fn add_eco_points(
        &self,
        ctx: &CallContext,
        req: AddEcoPointsRequest,
    ) -> ServiceResult<EcoPoints> {
        self.channel.call(ctx, "AddEcoPoints", &req).await
    }

    async fn get_eco_points_history(
        &self,
        ctx: &CallContext,
        req: EcoPointsHistoryRequest,
    ) -> ServiceResult<EcoPointsHistory> {
        self.channel.call(ctx, "GetEcoPointsHistory", &req).await
    }
}
