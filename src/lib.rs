//! Bidirectional index between an ordered list of items, their companion
//! controllers, and their positions ("sections").
//!
//! A list adapter rebuilds the [`SectionMap`] after every diff pass and then
//! uses it to translate in every direction in constant time:
//! item → section, section → item, section → controller, controller → section.

pub mod config;
pub mod core;

pub use crate::config::{MissingUpdatePolicy, SectionMapConfig};
pub use crate::core::error::{ErrorKind, SectionMapError};
pub use crate::core::identity::{ByAddress, ByValue, Handle, Identity};
pub use crate::core::enumerate::{Entry, Iter};
pub use crate::core::map::SectionMap;
