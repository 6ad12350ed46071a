pub mod health;
pub mod previsit;
