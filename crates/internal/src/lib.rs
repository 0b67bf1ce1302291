//! Internal utilities for the blockcrypt library
//!
//! Helpers shared by the block core, the chaining modes and the padding
//! layer. Nothing here is part of the stable public API.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq_u8, ct_gt_u8};
