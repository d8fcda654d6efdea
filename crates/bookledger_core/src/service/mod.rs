//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep interactive layers decoupled from storage details.

pub mod report_service;
pub mod sale_service;
