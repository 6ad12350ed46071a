use chrono::{DateTime, Utc};
use kernel::model::previsit::PrevisitReservation;
use serde::Serialize;

// 초대장 화면에 내려주는 응답. 생성 후에는 변경하지 않는다
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvitationResponse {
    pub user_name: String,
    pub space_name: String,
    pub address: String,
    pub previsit_start_at: DateTime<Utc>,
    pub previsit_end_at: DateTime<Utc>,
    pub purpose: String,
    pub attachments: Vec<String>,
}

impl From<PrevisitReservation> for InvitationResponse {
    fn from(value: PrevisitReservation) -> Self {
        let PrevisitReservation {
            previsit_id: _,
            reservation_id: _,
            host,
            space,
            previsit_start_at,
            previsit_end_at,
            purpose,
            attachments,
        } = value;
        Self {
            user_name: host.user_name,
            space_name: space.space_name,
            address: space.address,
            previsit_start_at,
            previsit_end_at,
            purpose,
            attachments,
        }
    }
}
