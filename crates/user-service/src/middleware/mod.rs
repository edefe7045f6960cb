//! HTTP middleware for the user service.

pub mod query_guard;

pub use query_guard::reject_unknown_user_query_params;
