//! Railway station router.
//!
//! Models a station as a graph of points joined by weighted segments,
//! grouped into paths and parks, and answers: "what is the shortest way
//! from this point to that one?"

pub mod cache;
pub mod cli;
pub mod domain;
pub mod fixture;
pub mod graph;
pub mod parks;
pub mod report;
pub mod web;
