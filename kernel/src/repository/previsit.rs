use crate::model::{id::ReservationId, previsit::PrevisitReservation};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PrevisitReservationRepository: Send + Sync {
    // 예약 ID 에 연결된 사전답사가 존재하는지 확인한다
    async fn exists_for_reservation(&self, reservation_id: ReservationId) -> AppResult<bool>;
    // 예약 ID 에 연결된 사전답사를 가져온다 (없으면 None)
    async fn find_for_reservation(
        &self,
        reservation_id: ReservationId,
    ) -> AppResult<Option<PrevisitReservation>>;
}
