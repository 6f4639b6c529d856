//! CLI module graph.

pub mod command;
pub mod form;
pub mod list;
pub mod menu;
pub mod output;
pub mod paths;
pub mod prompt;
