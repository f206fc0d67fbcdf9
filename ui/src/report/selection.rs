//! Person-filter checkbox state and the selection derived from it.

/// A single person filter checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCheckbox {
    pub person: String,
    pub checked: bool,
}

/// The current set of selected people, in checkbox order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        Self { names: out }
    }

    pub fn contains(&self, person: &str) -> bool {
        self.names.iter().any(|name| name == person)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

/// Scan checkboxes and collect the checked names.
pub fn read_selection(checkboxes: &[PersonCheckbox]) -> Selection {
    Selection::from_names(
        checkboxes
            .iter()
            .filter(|cb| cb.checked)
            .map(|cb| cb.person.clone()),
    )
}

/// Bulk write used by the select-all control.
pub fn set_all(checkboxes: &mut [PersonCheckbox], checked: bool) {
    for cb in checkboxes.iter_mut() {
        cb.checked = checked;
    }
}

/// Set every checkbox carrying `person`. Returns `false` when there is none.
pub fn set_checked(checkboxes: &mut [PersonCheckbox], person: &str, checked: bool) -> bool {
    let mut found = false;
    for cb in checkboxes.iter_mut().filter(|cb| cb.person == person) {
        cb.checked = checked;
        found = true;
    }
    found
}

/// Number of different people in `person_list`; a repeated name counts once,
/// matching the deduplicated [`Selection`].
pub fn distinct_people(person_list: &[String]) -> usize {
    person_list
        .iter()
        .enumerate()
        .filter(|(idx, name)| !person_list[..*idx].contains(name))
        .count()
}

/// Derived state of the select-all control.
pub fn all_selected(selection: &Selection, person_list: &[String]) -> bool {
    selection.len() == distinct_people(person_list)
}

/// One checked checkbox per person, in `person_list` order.
pub fn checkboxes_for(person_list: &[String]) -> Vec<PersonCheckbox> {
    person_list
        .iter()
        .map(|person| PersonCheckbox {
            person: person.clone(),
            checked: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<String> {
        vec!["Ali".into(), "Sara".into(), "Reza".into()]
    }

    #[test]
    fn selection_follows_checkbox_order() {
        let mut boxes = checkboxes_for(&people());
        set_checked(&mut boxes, "Ali", false);
        let selection = read_selection(&boxes);
        assert_eq!(selection.as_slice(), ["Sara", "Reza"]);
        assert!(!selection.contains("Ali"));
    }

    #[test]
    fn select_all_on_then_off_restores_empty() {
        let mut boxes = checkboxes_for(&people());
        set_checked(&mut boxes, "Sara", false);

        set_all(&mut boxes, true);
        assert_eq!(read_selection(&boxes).as_slice(), people().as_slice());

        set_all(&mut boxes, false);
        assert!(read_selection(&boxes).is_empty());
    }

    #[test]
    fn unknown_person_toggle_is_ignored() {
        let mut boxes = checkboxes_for(&people());
        assert!(!set_checked(&mut boxes, "Nobody", false));
        assert_eq!(read_selection(&boxes).len(), 3);
    }

    #[test]
    fn all_selected_compares_sizes() {
        let list = people();
        assert!(all_selected(&Selection::from_names(list.clone()), &list));
        assert!(!all_selected(&Selection::from_names(["Ali"]), &list));
        assert!(!all_selected(&Selection::default(), &list));
    }

    #[test]
    fn repeated_names_count_once() {
        let list: Vec<String> = vec!["Ali".into(), "Ali".into(), "Sara".into()];
        assert_eq!(distinct_people(&list), 2);

        let mut boxes = checkboxes_for(&list);
        assert!(all_selected(&read_selection(&boxes), &list));

        set_checked(&mut boxes, "Ali", false);
        assert!(boxes.iter().filter(|cb| cb.person == "Ali").all(|cb| !cb.checked));
        assert_eq!(read_selection(&boxes).as_slice(), ["Sara"]);
    }
}
