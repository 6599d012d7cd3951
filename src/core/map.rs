// SectionMap state + point lookups
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::config::SectionMapConfig;
use crate::core::error::SectionMapError;
use crate::core::identity::{ByValue, Identity};

/// Maps an ordered list of items and their controllers to sections, with
/// constant-time lookups in every direction.
///
/// Sections are dense: pair `i` of the last [`rebuild`](Self::rebuild) lives
/// at section `i`. Item lookups go through the identity strategy `I`;
/// controllers are keyed by their own `Eq + Hash`, in a separate table, so the
/// two key spaces never mix.
///
/// Not thread safe; the owning adapter serializes access.
pub struct SectionMap<T, C, I: Identity<T> = ByValue> {
    pub(crate) identity: I,
    pub(crate) config: SectionMapConfig,
    pub(crate) items: Vec<T>,
    pub(crate) controllers: Vec<C>,
    pub(crate) item_sections: HashMap<I::Key, usize>,
    pub(crate) controller_sections: HashMap<C, usize>,
}

impl<T, C> SectionMap<T, C, ByValue>
where
    T: Eq + Hash + Clone,
    C: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_identity(ByValue)
    }
}

impl<T, C> Default for SectionMap<T, C, ByValue>
where
    T: Eq + Hash + Clone,
    C: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C, I> SectionMap<T, C, I>
where
    I: Identity<T>,
    C: Eq + Hash,
{
    pub fn with_identity(identity: I) -> Self {
        Self::with_config(identity, SectionMapConfig::default())
    }

    pub fn with_config(identity: I, config: SectionMapConfig) -> Self {
        let cap = config.capacity;
        SectionMap {
            identity,
            config,
            items: Vec::with_capacity(cap),
            controllers: Vec::with_capacity(cap),
            item_sections: HashMap::with_capacity(cap),
            controller_sections: HashMap::with_capacity(cap),
        }
    }

    pub fn config(&self) -> &SectionMapConfig {
        &self.config
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in section order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Controllers in section order.
    pub fn controllers(&self) -> &[C] {
        &self.controllers
    }

    pub fn get(&self, section: usize) -> Option<(&T, &C)> {
        Some((self.items.get(section)?, self.controllers.get(section)?))
    }

    pub fn item_for_section(&self, section: usize) -> Result<&T, SectionMapError> {
        self.items.get(section).ok_or(SectionMapError::SectionOutOfBounds {
            section,
            len: self.len(),
        })
    }

    pub fn controller_for_section(&self, section: usize) -> Result<&C, SectionMapError> {
        self.controllers.get(section).ok_or(SectionMapError::SectionOutOfBounds {
            section,
            len: self.len(),
        })
    }

    //None means "not found", never an error
    pub fn section_for_item(&self, item: &T) -> Option<usize> {
        self.item_sections.get(&self.identity.key(item)).copied()
    }

    pub fn controller_for_item(&self, item: &T) -> Option<&C> {
        let section = self.section_for_item(item)?;
        self.controllers.get(section)
    }

    pub fn section_for_controller(&self, controller: &C) -> Option<usize> {
        self.controller_sections.get(controller).copied()
    }

    pub fn contains_item(&self, item: &T) -> bool {
        self.section_for_item(item).is_some()
    }
}

impl<T, C, I> Clone for SectionMap<T, C, I>
where
    T: Clone,
    C: Clone,
    I: Identity<T> + Clone,
    I::Key: Clone,
{
    fn clone(&self) -> Self {
        SectionMap {
            identity: self.identity.clone(),
            config: self.config.clone(),
            items: self.items.clone(),
            controllers: self.controllers.clone(),
            item_sections: self.item_sections.clone(),
            controller_sections: self.controller_sections.clone(),
        }
    }
}

impl<T, C, I> fmt::Debug for SectionMap<T, C, I>
where
    T: fmt::Debug,
    C: fmt::Debug,
    I: Identity<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.items.iter().zip(self.controllers.iter()).enumerate())
            .finish()
    }
}
