//! Row / section visibility for person-tagged elements.
//!
//! The same rule drives the summary table and the detail sections: an
//! element tagged with a person is shown iff that person is selected.

use std::collections::BTreeMap;

use super::selection::Selection;

pub type VisibilityMap = BTreeMap<String, bool>;

pub fn is_visible(selection: &Selection, person: &str) -> bool {
    selection.contains(person)
}

/// Visibility for every tag. Duplicate tags collapse to one entry.
pub fn project<'a, I>(selection: &Selection, tags: I) -> VisibilityMap
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .map(|person| (person.to_string(), is_visible(selection, person)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn only_selected_people_are_visible() {
        let selection = Selection::from_names(["Ali"]);
        let map = project(&selection, ["Ali", "Sara"]);
        assert_eq!(map.get("Ali"), Some(&true));
        assert_eq!(map.get("Sara"), Some(&false));
    }

    #[test]
    fn empty_selection_hides_everything() {
        let map = project(&Selection::default(), ["Ali", "Sara"]);
        assert!(map.values().all(|visible| !visible));
    }

    proptest! {
        #[test]
        fn visible_iff_selected(
            people in proptest::collection::btree_set("[a-z]{1,6}", 0..8),
            mask in proptest::collection::vec(any::<bool>(), 8),
        ) {
            let people: Vec<String> = people.into_iter().collect();
            let selection = Selection::from_names(
                people.iter().zip(&mask).filter(|(_, on)| **on).map(|(p, _)| p.clone()),
            );
            let map = project(&selection, people.iter().map(String::as_str));
            for person in &people {
                prop_assert_eq!(map[person], selection.contains(person));
            }
        }
    }
}
