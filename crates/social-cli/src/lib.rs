//! social-cli: Interactive console for the social graph.
//!
//! Presents a numbered menu, reads line-based input, and runs each choice
//! as one operation against a [`social_graph::PeopleStore`].

pub mod dispatch;
pub mod error;
pub mod menu;

pub use dispatch::run_menu;
