pub mod previsit;
