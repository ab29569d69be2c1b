//! Carbon accounting and sustainability scoring for multi-modal trips.
//!
//! Turns a candidate route (a list of transport legs with mode, distance,
//! duration and cost) into per-leg emissions, a route footprint, a 0-100
//! sustainability score, and a comparison against driving the same distance.

pub mod batch;
pub mod carbon;
pub mod config;
pub mod domain;
pub mod scoring;
pub mod web;
