//! HTTP handlers

pub mod health;
pub mod history;
pub mod scan;
