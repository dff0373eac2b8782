//! HTTP route handlers

pub mod mcqs;
pub mod transfer;
