use crate::model::id::{PrevisitId, ReservationId, SpaceId, UserId};
use chrono::{DateTime, Utc};

// 하나의 예약(reservation_id)당 사전답사는 최대 1건만 존재한다
#[derive(Debug, Clone, PartialEq)]
pub struct PrevisitReservation {
    pub previsit_id: PrevisitId,
    pub reservation_id: ReservationId,
    pub host: PrevisitHost,
    pub space: PrevisitSpace,
    pub previsit_start_at: DateTime<Utc>,
    pub previsit_end_at: DateTime<Utc>,
    pub purpose: String,
    // 업로드 순서를 유지한다
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrevisitHost {
    pub user_id: UserId,
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrevisitSpace {
    pub space_id: SpaceId,
    pub space_name: String,
    pub address: String,
}
