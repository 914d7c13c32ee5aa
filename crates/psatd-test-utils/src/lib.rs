//! Test utilities for PSATD solver development.
//!
//! Provides seeded random field fixtures ([`fixtures`]) and mock
//! implementations of the external collaborators ([`MockTransform`],
//! [`MockDeposition`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod mocks;

pub use mocks::{MockDeposition, MockTransform};
