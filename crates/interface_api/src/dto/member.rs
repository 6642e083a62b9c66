//! Member DTOs

use serde::Deserialize;

use core_kernel::UserId;
use infra_db::repositories::member::{MemberPatch, NewMember};

#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub member_user_id: UserId,
    pub house_rules: String,
}

impl From<CreateMemberRequest> for NewMember {
    fn from(request: CreateMemberRequest) -> Self {
        NewMember {
            member_user_id: request.member_user_id,
            house_rules: request.house_rules,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateMemberRequest {
    pub house_rules: Option<String>,
}

impl From<UpdateMemberRequest> for MemberPatch {
    fn from(request: UpdateMemberRequest) -> Self {
        MemberPatch {
            house_rules: request.house_rules,
        }
    }
}
