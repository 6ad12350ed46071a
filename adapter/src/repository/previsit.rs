use crate::database::{model::previsit::PrevisitReservationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{PrevisitId, ReservationId},
    previsit::PrevisitReservation,
};
use kernel::repository::previsit::PrevisitReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct PrevisitReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PrevisitReservationRepository for PrevisitReservationRepositoryImpl {
    // 예약 ID 에 연결된 사전답사가 존재하는지 확인한다
    async fn exists_for_reservation(&self, reservation_id: ReservationId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1
                    FROM previsit_reservations
                    WHERE reservation_id = $1
                )
            "#,
        )
        .bind(reservation_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    // 예약 ID 에 연결된 사전답사를 가져온다
    // 예약당 사전답사는 최대 1건이므로 fetch_optional 로 충분하다
    async fn find_for_reservation(
        &self,
        reservation_id: ReservationId,
    ) -> AppResult<Option<PrevisitReservation>> {
        let row = sqlx::query_as::<_, PrevisitReservationRow>(
            r#"
                SELECT
                    p.previsit_id,
                    p.reservation_id,
                    p.user_id,
                    u.user_name,
                    s.space_id,
                    s.space_name,
                    s.address,
                    p.previsit_start_at,
                    p.previsit_end_at,
                    p.purpose
                FROM previsit_reservations AS p
                INNER JOIN users  AS u ON p.user_id  = u.user_id
                INNER JOIN spaces AS s ON p.space_id = s.space_id
                WHERE p.reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let attachments = self.find_attachments(row.previsit_id).await?;
        Ok(Some(row.into_previsit(attachments)))
    }
}

impl PrevisitReservationRepositoryImpl {
    // 첨부파일 목록을 업로드 순서대로 가져오기 위해 내부적으로 쓰는 메서드
    async fn find_attachments(&self, previsit_id: PrevisitId) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
                SELECT file_url
                FROM previsit_attachments
                WHERE previsit_id = $1
                ORDER BY position ASC
            "#,
        )
        .bind(previsit_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}
