//! Endpoint descriptors
//!
//! An [`Endpoint`] is an immutable template describing one API operation:
//! its URI, how parameters are rendered, and which of them are required.
//! Each request builds its own [`EndpointCall`] from the template, so
//! parameter lists are never shared between calls.
//!
//! # Overview
//!
//! ```text
//! Endpoint (static) ──call()──▶ EndpointCall ──set_params()──▶ verify() ──▶ render()
//!                                                                          │
//!                                                         RenderedUri { path, query }
//! ```

pub mod catalog;
mod render;
mod types;

pub use render::{render, PATH_MARKER};
pub use types::{Endpoint, EndpointCall, Param, ParamKind, ParamValue, RenderedUri};
