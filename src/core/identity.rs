// item identity contract + controller handles
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;
use std::sync::Arc;

/// Decides when two items are "the same logical entity".
///
/// Items with equal keys are interchangeable for every item-keyed lookup;
/// `SectionMap::update_item` relies on this to swap in a fresh instance.
/// Any `Fn(&T) -> K` closure is an identity, which is the usual way to plug in
/// a diff identifier:
///
/// ```
/// use section_map::SectionMap;
///
/// struct Post { id: u64, title: String }
///
/// let mut map = SectionMap::with_identity(|p: &Post| p.id);
/// map.rebuild(vec![Post { id: 7, title: "draft".into() }], vec!["header"]).unwrap();
/// assert_eq!(map.section_for_item(&Post { id: 7, title: "final".into() }), Some(0));
/// ```
pub trait Identity<T> {
    type Key: Eq + Hash;

    fn key(&self, item: &T) -> Self::Key;
}

/// The item is its own key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValue;

impl<T: Eq + Hash + Clone> Identity<T> for ByValue {
    type Key = T;

    fn key(&self, item: &T) -> T {
        item.clone()
    }
}

impl<T, K, F> Identity<T> for F
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    type Key = K;

    fn key(&self, item: &T) -> K {
        self(item)
    }
}

/// Pointer identity for shared items: two `Rc`s are the same item only if they
/// point at the same allocation, no matter what the pointee compares as.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByAddress;

impl<U> Identity<Rc<U>> for ByAddress {
    type Key = *const ();

    fn key(&self, item: &Rc<U>) -> *const () {
        Rc::as_ptr(item).cast()
    }
}

impl<U> Identity<Arc<U>> for ByAddress {
    type Key = *const ();

    fn key(&self, item: &Arc<U>) -> *const () {
        Arc::as_ptr(item).cast()
    }
}

/// Shared controller handle compared and hashed by address.
///
/// Controllers are opaque to the map; wrapping them in a `Handle` keeps two
/// structurally equal controllers from colliding in the controller table.
pub struct Handle<U>(Rc<U>);

impl<U> Handle<U> {
    pub fn new(value: U) -> Self {
        Handle(Rc::new(value))
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    pub fn into_inner(self) -> Rc<U> {
        self.0
    }
}

impl<U> From<Rc<U>> for Handle<U> {
    fn from(rc: Rc<U>) -> Self {
        Handle(rc)
    }
}

impl<U> Clone for Handle<U> {
    fn clone(&self) -> Self {
        Handle(Rc::clone(&self.0))
    }
}

impl<U> PartialEq for Handle<U> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<U> Eq for Handle<U> {}

impl<U> Hash for Handle<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

impl<U> Deref for Handle<U> {
    type Target = U;

    fn deref(&self) -> &U {
        &self.0
    }
}

impl<U: fmt::Debug> fmt::Debug for Handle<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&*self.0).finish()
    }
}
