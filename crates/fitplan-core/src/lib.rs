// ABOUTME: Core types and constants for the fitplan weekly workout scheduler
// ABOUTME: Foundation crate with error handling, domain models, and planning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for the fitplan
//! scheduling engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Profile bounds, day limits and other planning constants
//! - **models**: User profile, exercise, capacity and schedule types

/// Unified error handling system with standard error codes
pub mod errors;

/// Planning constants organized by domain
pub mod constants;

/// Core data models (profile, exercises, capacity assessment, weekly schedule)
pub mod models;
