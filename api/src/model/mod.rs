pub mod invitation;
pub mod previsit;
