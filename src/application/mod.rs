// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`viewer`]: The paged media viewer state machine
//! - [`catalog`]: Menu tabs and their pages
//! - [`menu`]: Tab switching on top of the viewer
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`submit`]: Contact and booking submission workflow
//! - [`links`]: Deep links (WhatsApp, phone, mail, maps)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer consumes the effects and snapshots produced here

pub mod catalog;
pub mod links;
pub mod menu;
pub mod port;
pub mod submit;
pub mod viewer;
