//! Readiness Compass - Export Readiness Self-Assessment Engine
//!
//! This crate implements a weighted multiple-choice assessment: thirty
//! questions across six dimensions, a deterministic scoring engine, a
//! score-bracket outcome resolver, and a lead-capture step that forwards
//! submissions to external record-keeping endpoints.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
