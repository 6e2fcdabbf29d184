// SPDX-License-Identifier: MPL-2.0
//! Rendering-side helpers.
//!
//! The page markup itself lives outside this crate. This module provides what
//! the rendering layer needs on top of the application state.
//!
//! - [`notifications`] - Toast notification system for visitor feedback
//! - [`presentation`] - Counter text, carousel positions and thumbnails

pub mod notifications;
pub mod presentation;
