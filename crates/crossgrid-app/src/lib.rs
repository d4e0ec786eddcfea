//! Shared library module for the Crossgrid terminal app.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod command;
pub mod error;
pub mod export;
pub mod puzzle_factory;
pub mod render;
