pub mod dto;
pub mod models;
pub mod ranked_store;
pub mod repository;

pub use ranked_store::RankedStore;
