// SPDX-License-Identifier: MPL-2.0
//! User-facing components.
//!
//! - [`icons`] - Built-in SVG icon markup and the overridable icon set
//! - [`notifications`] - Toast notification system for user feedback

pub mod icons;
pub mod notifications;
