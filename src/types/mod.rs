//! Core types for argumentative explanations.

pub mod argument;
pub mod edge;
pub mod framework;

pub use argument::{Argument, ArgumentId};
pub use edge::{AttackEdge, SupportEdge};
pub use framework::ArgumentationFramework;
