//! Kuuni Core
//!
//! Core types and abstractions for the Kuuni booking platform.
//!
//! This crate contains:
//! - Domain types: Core business entities (Experience, BookingRequest, etc.)
//! - DTOs: Data transfer objects for the HTTP API

pub mod domain;
pub mod dto;
