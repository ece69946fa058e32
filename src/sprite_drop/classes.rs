use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Host-side class list used to style drop receivers.
///
/// Elements are addressed by identity; the store decides how a class is rendered.
pub trait ClassList<E> {
    fn add_class(&mut self, element: E, class: &str);
    fn remove_class(&mut self, element: E, class: &str);
    fn has_class(&self, element: E, class: &str) -> bool;
}

/// In-memory class store keyed by element identity.
#[derive(Clone, Debug)]
pub struct ElementClasses<E> {
    classes: HashMap<E, HashSet<String>>,
}

impl<E> Default for ElementClasses<E> {
    fn default() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }
}

impl<E: Copy + Eq + Hash> ElementClasses<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements currently carrying `class`, in no particular order.
    pub fn elements_with(&self, class: &str) -> Vec<E> {
        self.classes
            .iter()
            .filter(|(_, set)| set.contains(class))
            .map(|(element, _)| *element)
            .collect()
    }
}

impl<E: Copy + Eq + Hash> ClassList<E> for ElementClasses<E> {
    fn add_class(&mut self, element: E, class: &str) {
        self.classes
            .entry(element)
            .or_default()
            .insert(class.to_string());
    }

    fn remove_class(&mut self, element: E, class: &str) {
        if let Some(set) = self.classes.get_mut(&element) {
            set.remove(class);
            if set.is_empty() {
                self.classes.remove(&element);
            }
        }
    }

    fn has_class(&self, element: E, class: &str) -> bool {
        self.classes
            .get(&element)
            .is_some_and(|set| set.contains(class))
    }
}
