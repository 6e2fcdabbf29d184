// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Form delivery over HTTP (implements [`FormSubmitter`])
//!
//! [`FormSubmitter`]: crate::application::port::FormSubmitter

pub mod http;

pub use http::HttpSubmitter;
