//! Resume Validator: a keyword-dispatch chat service giving canned resume advice,
//! plus the client-side conversation state that drives it.

pub mod config;
pub mod conversation;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
