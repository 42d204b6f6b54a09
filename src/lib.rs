//! Session payroll engine for Halo Therapies.
//!
//! This crate prices massage sessions for contract therapists: a base payout
//! from the nearest duration tier, surcharges for deep tissue and advanced
//! bodywork, add-ons, a flat review bonus and tips. Every calculation can
//! carry an audit trace explaining each step.
//!
//! Around the calculator sit the session log ([`store`]), conversion to and
//! from the flat database row ([`calculation::flatten_session_record`]),
//! summaries, CSV/JSON/plain-text exports and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
