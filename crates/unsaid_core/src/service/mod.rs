//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, moderation and store calls into use-case APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod feed_service;
pub mod submission_service;
