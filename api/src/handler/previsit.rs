use crate::model::{invitation::InvitationResponse, previsit::PrevisitExistsResponse};
use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::ReservationId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn check_previsit(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PrevisitExistsResponse>> {
    registry
        .previsit_reservation_repository()
        .exists_for_reservation(reservation_id)
        .await
        .map(PrevisitExistsResponse::new)
        .map(Json)
}

pub async fn show_previsit_invitation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<InvitationResponse>> {
    registry
        .previsit_reservation_repository()
        .find_for_reservation(reservation_id)
        .await
        .and_then(|pv| match pv {
            Some(pv) => Ok(Json(pv.into())),
            None => Err(AppError::EntityNotFound(
                "사전답사 예약을 찾을 수 없습니다.".into(),
            )),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::TimeZone;
    use chrono::Utc;
    use kernel::model::{
        id::{PrevisitId, SpaceId, UserId},
        previsit::{PrevisitHost, PrevisitReservation, PrevisitSpace},
    };
    use kernel::repository::{
        health::HealthCheckRepository, previsit::PrevisitReservationRepository,
    };
    use std::sync::Arc;

    struct FixedHealthCheckRepository;

    #[async_trait]
    impl HealthCheckRepository for FixedHealthCheckRepository {
        async fn check_db(&self) -> bool {
            true
        }
    }

    // 사전답사가 하나도 저장되어 있지 않은 상태
    struct EmptyPrevisitRepository;

    #[async_trait]
    impl PrevisitReservationRepository for EmptyPrevisitRepository {
        async fn exists_for_reservation(
            &self,
            _reservation_id: ReservationId,
        ) -> AppResult<bool> {
            Ok(false)
        }

        async fn find_for_reservation(
            &self,
            _reservation_id: ReservationId,
        ) -> AppResult<Option<PrevisitReservation>> {
            Ok(None)
        }
    }

    // 예약 42 에만 사전답사가 연결된 상태
    struct SinglePrevisitRepository;

    #[async_trait]
    impl PrevisitReservationRepository for SinglePrevisitRepository {
        async fn exists_for_reservation(
            &self,
            reservation_id: ReservationId,
        ) -> AppResult<bool> {
            Ok(reservation_id == ReservationId::new(42))
        }

        async fn find_for_reservation(
            &self,
            reservation_id: ReservationId,
        ) -> AppResult<Option<PrevisitReservation>> {
            if reservation_id != ReservationId::new(42) {
                return Ok(None);
            }
            Ok(Some(PrevisitReservation {
                previsit_id: PrevisitId::new(1),
                reservation_id,
                host: PrevisitHost {
                    user_id: UserId::new(7),
                    user_name: "김지민".into(),
                },
                space: PrevisitSpace {
                    space_id: SpaceId::new(3),
                    space_name: "회의실 A".into(),
                    address: "서울특별시 강남구 테헤란로 1".into(),
                },
                previsit_start_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
                previsit_end_at: Utc.with_ymd_and_hms(2025, 3, 1, 11, 0, 0).unwrap(),
                purpose: "시설 점검".into(),
                attachments: vec!["a.png".into(), "b.png".into()],
            }))
        }
    }

    fn registry_with(repo: Arc<dyn PrevisitReservationRepository>) -> AppRegistry {
        AppRegistry::new_with(Arc::new(FixedHealthCheckRepository), repo)
    }

    #[tokio::test]
    async fn absent_previsit_reports_exists_false() {
        let registry = registry_with(Arc::new(EmptyPrevisitRepository));
        let res = check_previsit(Path(ReservationId::new(42)), State(registry))
            .await
            .unwrap();
        assert!(!res.0.exists);
    }

    #[tokio::test]
    async fn absent_previsit_invitation_responds_404_with_message() {
        let registry = registry_with(Arc::new(EmptyPrevisitRepository));
        let err = show_previsit_invitation(Path(ReservationId::new(42)), State(registry))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "사전답사 예약을 찾을 수 없습니다.");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "사전답사 예약을 찾을 수 없습니다.");
    }

    #[tokio::test]
    async fn stored_previsit_is_projected_into_invitation() {
        let registry = registry_with(Arc::new(SinglePrevisitRepository));
        let res = check_previsit(Path(ReservationId::new(42)), State(registry.clone()))
            .await
            .unwrap();
        assert!(res.0.exists);

        let res = show_previsit_invitation(Path(ReservationId::new(42)), State(registry))
            .await
            .unwrap();
        assert_eq!(res.0.user_name, "김지민");
        assert_eq!(res.0.space_name, "회의실 A");
        assert_eq!(res.0.attachments, vec!["a.png", "b.png"]);
    }

    #[tokio::test]
    async fn never_issued_id_is_absent_not_an_error() {
        let registry = registry_with(Arc::new(SinglePrevisitRepository));
        let res = check_previsit(Path(ReservationId::new(9999)), State(registry))
            .await
            .unwrap();
        assert!(!res.0.exists);
    }
}
