pub mod health;
pub mod previsit;
pub mod v1;
