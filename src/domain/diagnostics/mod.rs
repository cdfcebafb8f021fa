// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! This module provides pure domain types for diagnostics:
//! - [`BufferCapacity`]: Capacity of the lifecycle history buffer

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
