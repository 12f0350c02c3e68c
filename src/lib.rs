//! Triangle angle viewer.
//!
//! An HTTP service with two views: an input view that accepts a triangle
//! and a triangle view that reports each vertex's interior angle plus the
//! arc geometry a client needs to draw angle arcs.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`router`] | Route table, base path handling, Axum router assembly |
//! | [`views`] | Input and triangle view handlers |
//! | [`geometry`] | Triangle value types, angle convention, angle engine |
//! | [`diagram`] | Validated angle-arc props per vertex |
//! | [`state`] | Shared application state and the current triangle |
//! | [`config`] | Environment configuration |
//! | [`error`] | Error codes and JSON error bodies |

pub mod config;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod router;
pub mod state;
pub mod views;
