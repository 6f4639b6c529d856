//! Inbound adapters: the ways an operator drives the roster.

pub mod cli;
