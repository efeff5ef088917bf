//! Folio Core
//!
//! Core types for the Folio project catalog.
//!
//! This crate contains:
//! - Domain types: Core business entities (Project, Tag, Review)
//! - DTOs: Form and view shapes exchanged with the HTTP layer

pub mod domain;
pub mod dto;
