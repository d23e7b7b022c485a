// Client companies: CRUD, list filtering, and the dashboard summary.

pub mod filter;
pub mod handlers;
pub mod repository;
