//! Driver's License Scan Library
//!
//! This library provides a thin client that sends a driver's-license image to
//! a multimodal completion API and parses the structured JSON response into
//! named fields. There is no local image processing: the extraction itself is
//! delegated to the hosted model through a fixed prompt and a strict response
//! schema.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `image_source`: License image resolution (URL pass-through, file encoding).
//! - `models`: License record data models.
//! - `prompts`: Fixed instruction text and response schema.
//! - `scan`: Scan workflow entry points.
//! - `services`: Completion API client.

pub mod config;
pub mod errors;
pub mod image_source;
pub mod models;
pub mod prompts;
pub mod scan;
pub mod services;
