//! Address DTOs

use serde::Deserialize;

use core_kernel::UserId;
use infra_db::repositories::address::{AddressPatch, NewAddress};

#[derive(Debug, Deserialize)]
pub struct CreateAddressRequest {
    pub member_user_id: UserId,
    pub house_number: String,
    pub street: String,
    pub town: String,
}

impl From<CreateAddressRequest> for NewAddress {
    fn from(request: CreateAddressRequest) -> Self {
        NewAddress {
            member_user_id: request.member_user_id,
            house_number: request.house_number,
            street: request.street,
            town: request.town,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAddressRequest {
    pub house_number: Option<String>,
    pub street: Option<String>,
    pub town: Option<String>,
}

impl From<UpdateAddressRequest> for AddressPatch {
    fn from(request: UpdateAddressRequest) -> Self {
        AddressPatch {
            house_number: request.house_number,
            street: request.street,
            town: request.town,
        }
    }
}
