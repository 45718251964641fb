pub mod constants;
pub mod errors;
pub mod impls;
pub mod methods;
pub mod models;
