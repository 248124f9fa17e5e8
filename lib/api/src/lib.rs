//! # wisata API
//!
//! REST surface for the wisata recommender. The engine is built to
//! completion before the listener binds, so no request can observe
//! partially-initialized state.

pub mod rest;

pub use rest::RestApi;
