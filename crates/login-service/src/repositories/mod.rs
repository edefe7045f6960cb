//! In-memory data access for the login service.

pub mod users;
