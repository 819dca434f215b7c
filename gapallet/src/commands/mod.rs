pub mod pallets;
pub mod ping;
pub mod submit;
