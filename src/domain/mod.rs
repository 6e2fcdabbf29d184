// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core site types with no I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Nothing here performs I/O, so every rule can be tested in isolation.
//!
//! # Modules
//!
//! - [`media`]: Media types ([`MediaItem`](media::MediaItem),
//!   [`GalleryId`](media::GalleryId), [`MediaFilter`](media::MediaFilter))
//! - [`ui`]: UI value objects ([`ZoomLevel`](ui::newtypes::ZoomLevel),
//!   [`SwipeThreshold`](ui::newtypes::SwipeThreshold))
//! - [`forms`]: Contact and booking forms with their validation rules

pub mod forms;
pub mod media;
pub mod ui;
