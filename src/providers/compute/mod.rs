pub mod errors;
pub mod functions;
pub mod impls;
pub mod models;
pub mod types;
