pub mod id;
pub mod previsit;
