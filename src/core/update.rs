// identity-preserving item replacement
use std::hash::Hash;

use crate::config::MissingUpdatePolicy;
use crate::core::error::SectionMapError;
use crate::core::identity::Identity;
use crate::core::map::SectionMap;

impl<T, C, I> SectionMap<T, C, I>
where
    I: Identity<T>,
    C: Eq + Hash,
{
    /// Swap in a new instance of an item that is already mapped.
    ///
    /// The stored item whose identity key equals `item`'s is replaced by
    /// `item`; its section and controller stay where they are. Returns the
    /// section that was updated.
    ///
    /// If nothing matches, the outcome depends on
    /// [`SectionMapConfig::missing_update`](crate::SectionMapConfig):
    /// `Ignore` returns `Ok(None)` and drops `item`, `Reject` returns
    /// [`SectionMapError::ItemNotFound`]. The map is unchanged either way.
    pub fn update_item(&mut self, item: T) -> Result<Option<usize>, SectionMapError> {
        let Some(section) = self.section_for_item(&item) else {
            return match self.config.missing_update {
                MissingUpdatePolicy::Ignore => {
                    tracing::trace!("update for unmapped item ignored");
                    Ok(None)
                }
                MissingUpdatePolicy::Reject => Err(SectionMapError::ItemNotFound),
            };
        };

        //equal key, so item_sections already points at this section
        let len = self.len();
        let slot = self
            .items
            .get_mut(section)
            .ok_or(SectionMapError::SectionOutOfBounds { section, len })?;
        *slot = item;

        tracing::trace!(section, "section map item updated");
        Ok(Some(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SectionMapConfig;
    use crate::core::error::ErrorKind;

    #[derive(Debug, Clone, PartialEq)]
    struct Post {
        id: u32,
        body: &'static str,
    }

    fn mk_post(id: u32, body: &'static str) -> Post {
        Post { id, body }
    }

    fn post_id(p: &Post) -> u32 {
        p.id
    }

    #[test]
    fn update_swaps_item_and_keeps_section_and_controller() {
        let mut m = SectionMap::with_identity(post_id);
        m.rebuild(
            vec![mk_post(1, "one"), mk_post(2, "two"), mk_post(3, "three")],
            vec!["c0", "c1", "c2"],
        )
        .unwrap();

        let updated = m.update_item(mk_post(2, "two, edited")).unwrap();
        assert_eq!(updated, Some(1));

        assert_eq!(m.item_for_section(1).unwrap().body, "two, edited");
        assert_eq!(*m.controller_for_section(1).unwrap(), "c1");
        assert_eq!(m.section_for_item(&mk_post(2, "anything")), Some(1));
        assert_eq!(m.section_for_controller(&"c1"), Some(1));
        assert_eq!(m.controller_for_item(&mk_post(2, "")), Some(&"c1"));

        //neighbours untouched
        assert_eq!(m.item_for_section(0).unwrap(), &mk_post(1, "one"));
        assert_eq!(m.item_for_section(2).unwrap(), &mk_post(3, "three"));
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn update_of_unknown_item_is_ignored_by_default() {
        let mut m = SectionMap::with_identity(post_id);
        m.rebuild(vec![mk_post(1, "one")], vec!["c0"]).unwrap();

        assert_eq!(m.update_item(mk_post(9, "ghost")).unwrap(), None);

        assert_eq!(m.len(), 1);
        assert_eq!(m.item_for_section(0).unwrap(), &mk_post(1, "one"));
        assert_eq!(m.section_for_item(&mk_post(9, "ghost")), None);
    }

    #[test]
    fn update_of_unknown_item_fails_when_strict() {
        let mut m = SectionMap::with_config(post_id, SectionMapConfig::strict());
        m.rebuild(vec![mk_post(1, "one")], vec!["c0"]).unwrap();

        let err = m.update_item(mk_post(9, "ghost")).unwrap_err();
        assert_eq!(err, SectionMapError::ItemNotFound);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(m.item_for_section(0).unwrap(), &mk_post(1, "one"));
    }

    #[test]
    fn update_on_empty_map() {
        let mut lenient: SectionMap<String, u8> = SectionMap::new();
        assert_eq!(lenient.update_item("x".to_string()).unwrap(), None);
        assert!(lenient.is_empty());

        let mut strict: SectionMap<String, u8, _> =
            SectionMap::with_config(crate::ByValue, SectionMapConfig::strict());
        assert!(strict.update_item("x".to_string()).is_err());
    }

    #[test]
    fn update_survives_until_next_rebuild() {
        let mut m = SectionMap::with_identity(post_id);
        m.rebuild(vec![mk_post(1, "v1")], vec![0u8]).unwrap();
        m.update_item(mk_post(1, "v2")).unwrap();
        assert_eq!(m.items()[0].body, "v2");

        m.rebuild(vec![mk_post(1, "v3")], vec![0u8]).unwrap();
        assert_eq!(m.items()[0].body, "v3");
    }
}
