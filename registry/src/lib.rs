use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::previsit::PrevisitReservationRepositoryImpl;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::previsit::PrevisitReservationRepository;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    previsit_reservation_repository: Arc<dyn PrevisitReservationRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::new_with(
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            Arc::new(PrevisitReservationRepositoryImpl::new(pool.clone())),
        )
    }

    // 테스트에서 리포지토리를 바꿔 끼울 수 있도록 분리한 생성자
    pub fn new_with(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        previsit_reservation_repository: Arc<dyn PrevisitReservationRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            previsit_reservation_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn previsit_reservation_repository(&self) -> Arc<dyn PrevisitReservationRepository> {
        self.previsit_reservation_repository.clone()
    }
}
