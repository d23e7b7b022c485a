// Candidate records: list filtering, CRUD, and the PostgreSQL stage updater
// that persists pipeline moves.

pub mod filter;
pub mod handlers;
pub mod repository;
