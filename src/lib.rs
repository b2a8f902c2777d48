//! Real World Events
//!
//! A single-page event site built with Dioxus.
//!
//! This library provides:
//! - The route table and page components
//! - The `use_event_space` hook (event capacity with derived spaces left)
//! - An in-memory event catalogue and todo list model
//! - A server shell with configuration and a status endpoint (`server` feature)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
