// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The application layer talks to the site backend only through these traits;
//! infrastructure adapters implement them.
//!
//! # Available Ports
//!
//! - [`submission`]: Delivery of contact and booking forms
//!
//! # Design Notes
//!
//! - Traits use domain types and plain serializable requests only
//! - Traits are `Send + Sync` so submitters can be shared across tasks
//! - Failures are reported through [`SubmitError`]; retries are left to the caller
//!
//! # Example
//!
//! ```ignore
//! use eatery_flamingo::application::port::{FormSubmitter, SubmissionRequest};
//!
//! async fn send(submitter: &impl FormSubmitter, request: SubmissionRequest) -> bool {
//!     submitter.submit(&request).await.is_ok()
//! }
//! ```

pub mod submission;

pub use submission::{FormSubmitter, SubmissionRequest, SubmitError, SubmitResponse};
