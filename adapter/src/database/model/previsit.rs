use kernel::model::{
    id::{PrevisitId, ReservationId, SpaceId, UserId},
    previsit::{PrevisitHost, PrevisitReservation, PrevisitSpace},
};
use sqlx::types::chrono::{DateTime, Utc};

// 사전답사 1건을 users / spaces 와 JOIN 해서 가져올 때 쓰는 타입
#[derive(sqlx::FromRow)]
pub struct PrevisitReservationRow {
    pub previsit_id: PrevisitId,
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub user_name: String,
    pub space_id: SpaceId,
    pub space_name: String,
    pub address: String,
    pub previsit_start_at: DateTime<Utc>,
    pub previsit_end_at: DateTime<Utc>,
    pub purpose: String,
}

// 첨부파일은 별도 쿼리로 가져오므로 From 대신 인수를 받는 메서드로 변환한다
impl PrevisitReservationRow {
    pub fn into_previsit(self, attachments: Vec<String>) -> PrevisitReservation {
        let PrevisitReservationRow {
            previsit_id,
            reservation_id,
            user_id,
            user_name,
            space_id,
            space_name,
            address,
            previsit_start_at,
            previsit_end_at,
            purpose,
        } = self;
        PrevisitReservation {
            previsit_id,
            reservation_id,
            host: PrevisitHost { user_id, user_name },
            space: PrevisitSpace {
                space_id,
                space_name,
                address,
            },
            previsit_start_at,
            previsit_end_at,
            purpose,
            attachments,
        }
    }
}
