//! Sprite library model receiving completed drops.

use tracing::debug;

use crate::sprite_drop::{DragPayloadGroup, SpriteRef};

/// Named sprite slot inside a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub sprite: SpriteRef,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub labels: Vec<Label>,
}

/// Where a drop landed in the library window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LibraryDropTarget {
    /// The category list itself.
    Categories,
    /// A single category row, by index.
    Category(usize),
}

/// What a drop changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropSummary {
    pub categories_added: usize,
    pub labels_added: usize,
    pub labels_replaced: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpriteLibrary {
    pub categories: Vec<Category>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Associate dropped sprite groups with the library.
    ///
    /// On the category list each group becomes a category; with `alt` all
    /// groups merge into one category named after the first. On a category
    /// every sprite becomes a label; with `alt` labels with the same name get
    /// their sprite replaced instead of a new label being added.
    pub fn apply_drop(
        &mut self,
        target: LibraryDropTarget,
        groups: &[DragPayloadGroup],
        alt: bool,
    ) -> DropSummary {
        let mut summary = DropSummary::default();
        match target {
            LibraryDropTarget::Categories if alt => {
                if let Some(first) = groups.first() {
                    let sprites = groups.iter().flat_map(|group| group.sprites.iter());
                    self.push_category(&first.group_name, sprites, &mut summary);
                }
            }
            LibraryDropTarget::Categories => {
                for group in groups {
                    self.push_category(&group.group_name, group.sprites.iter(), &mut summary);
                }
            }
            LibraryDropTarget::Category(index) => {
                let Some(category) = self.categories.get_mut(index) else {
                    debug!("Drop on missing category index {index}");
                    return summary;
                };
                for sprite in groups.iter().flat_map(|group| group.sprites.iter()) {
                    add_label(category, sprite, alt, &mut summary);
                }
            }
        }
        summary
    }

    fn push_category<'a>(
        &mut self,
        base_name: &str,
        sprites: impl Iterator<Item = &'a SpriteRef>,
        summary: &mut DropSummary,
    ) {
        let existing: Vec<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();
        let mut category = Category {
            name: unique_name(base_name, &existing),
            labels: Vec::new(),
        };
        for sprite in sprites {
            add_label(&mut category, sprite, false, summary);
        }
        self.categories.push(category);
        summary.categories_added += 1;
    }
}

fn add_label(category: &mut Category, sprite: &SpriteRef, replace: bool, summary: &mut DropSummary) {
    if replace
        && let Some(label) = category
            .labels
            .iter_mut()
            .find(|label| label.name == sprite.name)
    {
        label.sprite = sprite.clone();
        summary.labels_replaced += 1;
        return;
    }
    let existing: Vec<&str> = category.labels.iter().map(|l| l.name.as_str()).collect();
    let name = unique_name(&sprite.name, &existing);
    category.labels.push(Label {
        name,
        sprite: sprite.clone(),
    });
    summary.labels_added += 1;
}

/// `base`, or `base_N` with the smallest N not already taken.
fn unique_name(base: &str, existing: &[&str]) -> String {
    let base = if base.trim().is_empty() { "New" } else { base };
    if !existing.contains(&base) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| !existing.contains(&candidate.as_str()))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite_drop::PayloadSourceKind;

    fn group(name: &str, sprites: &[&str]) -> DragPayloadGroup {
        DragPayloadGroup {
            source_kind: PayloadSourceKind::TextureSheet,
            group_name: name.to_string(),
            sprites: sprites.iter().map(|s| SpriteRef::new(*s)).collect(),
        }
    }

    fn label_names(category: &Category) -> Vec<&str> {
        category.labels.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn category_list_drop_creates_one_category_per_group() {
        let mut library = SpriteLibrary::new();
        let summary = library.apply_drop(
            LibraryDropTarget::Categories,
            &[group("hero", &["idle", "run"]), group("s1", &["s1", "s2"])],
            false,
        );
        assert_eq!(summary.categories_added, 2);
        assert_eq!(summary.labels_added, 4);
        assert_eq!(label_names(library.category("hero").unwrap()), vec!["idle", "run"]);
        assert!(library.category("s1").is_some());
    }

    #[test]
    fn alt_drop_on_category_list_merges_groups() {
        let mut library = SpriteLibrary::new();
        library.apply_drop(
            LibraryDropTarget::Categories,
            &[group("hero", &["idle"]), group("s1", &["s1"])],
            true,
        );
        assert_eq!(library.categories.len(), 1);
        assert_eq!(label_names(&library.categories[0]), vec!["idle", "s1"]);
    }

    #[test]
    fn repeated_names_get_suffixes() {
        let mut library = SpriteLibrary::new();
        library.apply_drop(LibraryDropTarget::Categories, &[group("hero", &["a", "a"])], false);
        library.apply_drop(LibraryDropTarget::Categories, &[group("hero", &[])], false);
        assert_eq!(library.categories[1].name, "hero_1");
        assert_eq!(label_names(&library.categories[0]), vec!["a", "a_1"]);
    }

    #[test]
    fn alt_drop_on_category_replaces_matching_labels() {
        let mut library = SpriteLibrary::new();
        library.apply_drop(LibraryDropTarget::Categories, &[group("hero", &["idle"])], false);
        let replacement = DragPayloadGroup {
            source_kind: PayloadSourceKind::LooseSprite,
            group_name: "idle".into(),
            sprites: vec![SpriteRef::new("idle").with_source("v2.png"), SpriteRef::new("jump")],
        };
        let summary =
            library.apply_drop(LibraryDropTarget::Category(0), &[replacement], true);
        assert_eq!(summary.labels_replaced, 1);
        assert_eq!(summary.labels_added, 1);
        let hero = &library.categories[0];
        assert_eq!(label_names(hero), vec!["idle", "jump"]);
        assert!(hero.labels[0].sprite.source.is_some());
    }

    #[test]
    fn drop_on_missing_category_changes_nothing() {
        let mut library = SpriteLibrary::new();
        let summary = library.apply_drop(LibraryDropTarget::Category(3), &[group("x", &["a"])], false);
        assert_eq!(summary, DropSummary::default());
        assert!(library.categories.is_empty());
    }
}
