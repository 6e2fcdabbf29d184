// SPDX-License-Identifier: MPL-2.0
//! `eatery_flamingo` is the client-side core of the Eatery at Flamingo website.
//!
//! It provides the paged media viewer shared by the gallery lightbox and the
//! menu browser, the contact and booking form workflow, deep-link helpers and
//! toast notifications. Rendering is left to whatever layer consumes the
//! [`application::viewer::Effect`] values produced by the viewer.

#![doc(html_root_url = "https://docs.rs/eatery_flamingo/0.3.0")]

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod paths;
pub mod ui;
