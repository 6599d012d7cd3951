// ordered traversal
use std::hash::Hash;
use std::iter::{Enumerate, FusedIterator, Zip};
use std::ops::ControlFlow;
use std::slice;

use crate::core::identity::Identity;
use crate::core::map::SectionMap;

/// One pair of the map, as seen during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a, T, C> {
    pub section: usize,
    pub item: &'a T,
    pub controller: &'a C,
}

/// Iterator over a [`SectionMap`] in section order.
///
/// Walks the positional vectors, never the hash tables, so the order is always
/// `0, 1, .., len - 1`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T, C> {
    inner: Enumerate<Zip<slice::Iter<'a, T>, slice::Iter<'a, C>>>,
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = Entry<'a, T, C>;

    fn next(&mut self) -> Option<Self::Item> {
        let (section, (item, controller)) = self.inner.next()?;
        Some(Entry { section, item, controller })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<T, C, I> SectionMap<T, C, I>
where
    I: Identity<T>,
    C: Eq + Hash,
{
    /// Fresh traversal from section 0. Each call is independent.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            inner: self.items.iter().zip(self.controllers.iter()).enumerate(),
        }
    }

    /// Visit `(item, controller, section)` in ascending section order until
    /// the visitor breaks. Returns how many entries were visited, including
    /// the one that broke.
    pub fn enumerate<F>(&self, mut visit: F) -> usize
    where
        F: FnMut(&T, &C, usize) -> ControlFlow<()>,
    {
        let mut visited = 0;
        for entry in self.iter() {
            visited += 1;
            if visit(entry.item, entry.controller, entry.section).is_break() {
                break;
            }
        }
        visited
    }
}

impl<'a, T, C, I> IntoIterator for &'a SectionMap<T, C, I>
where
    I: Identity<T>,
    C: Eq + Hash,
{
    type Item = Entry<'a, T, C>;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
