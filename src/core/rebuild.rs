// wholesale rebuild + reset
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::core::error::SectionMapError;
use crate::core::identity::Identity;
use crate::core::map::SectionMap;

impl<T, C, I> SectionMap<T, C, I>
where
    I: Identity<T>,
    C: Eq + Hash + Clone,
{
    /// Replace every pair with `items[i] ↔ controllers[i]` at section `i`.
    ///
    /// All inputs are validated before anything is touched:
    /// - `items` and `controllers` must have the same length
    /// - no two items may share an identity key
    /// - no controller may appear twice
    ///
    /// On error the previous generation stays installed as-is.
    pub fn rebuild<It, Cs>(&mut self, items: It, controllers: Cs) -> Result<(), SectionMapError>
    where
        It: IntoIterator<Item = T>,
        Cs: IntoIterator<Item = C>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let controllers: Vec<C> = controllers.into_iter().collect();

        if items.len() != controllers.len() {
            return Err(rejected(SectionMapError::LengthMismatch {
                items: items.len(),
                controllers: controllers.len(),
            }));
        }

        let len = items.len();
        let cap = len.max(self.config.capacity);

        let mut item_sections = HashMap::with_capacity(cap);
        for (section, item) in items.iter().enumerate() {
            match item_sections.entry(self.identity.key(item)) {
                Entry::Occupied(e) => {
                    return Err(rejected(SectionMapError::DuplicateItem {
                        first: *e.get(),
                        second: section,
                    }));
                }
                Entry::Vacant(e) => {
                    e.insert(section);
                }
            }
        }

        let mut controller_sections = HashMap::with_capacity(cap);
        for (section, controller) in controllers.iter().enumerate() {
            match controller_sections.entry(controller.clone()) {
                Entry::Occupied(e) => {
                    return Err(rejected(SectionMapError::DuplicateController {
                        first: *e.get(),
                        second: section,
                    }));
                }
                Entry::Vacant(e) => {
                    e.insert(section);
                }
            }
        }

        //everything validated, swap the whole generation in at once
        let old_len = self.items.len();
        self.items = items;
        self.controllers = controllers;
        self.item_sections = item_sections;
        self.controller_sections = controller_sections;

        tracing::debug!(old_len, new_len = len, "section map rebuilt");
        Ok(())
    }

    /// Drop every pair. No-op on an empty map.
    pub fn reset(&mut self) {
        if self.is_empty() {
            return;
        }
        tracing::trace!(len = self.len(), "section map reset");

        self.items.clear();
        self.controllers.clear();
        self.item_sections.clear();
        self.controller_sections.clear();
    }
}

fn rejected(err: SectionMapError) -> SectionMapError {
    tracing::debug!(error = %err, "section map rebuild rejected");
    err
}
