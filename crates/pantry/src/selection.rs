use brokeeats_shared::Result;
use brokeeats_shared::pantry::{PantryItem, pantry_ingredients};

use crate::PantryQuery;

/// Owns the pantry items and their `selected` flags for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct PantrySelection {
    items: Vec<PantryItem>,
}

impl Default for PantrySelection {
    fn default() -> Self {
        Self::new(pantry_ingredients())
    }
}

impl PantrySelection {
    pub fn new(items: Vec<PantryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    /// Flips the item's flag and returns its new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            brokeeats_shared::not_found!("pantry item {id}");
        };

        item.selected = !item.selected;
        tracing::debug!(
            id,
            name = item.name.as_str(),
            selected = item.selected,
            "toggled pantry item"
        );

        Ok(item.selected)
    }

    /// Toggles the item whose name matches `name`, ignoring case.
    pub fn toggle_by_name(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        let Some(id) = self
            .items
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name))
            .map(|i| i.id.to_owned())
        else {
            brokeeats_shared::not_found!("pantry ingredient {name}");
        };

        self.toggle(&id)
    }

    pub fn selected(&self) -> impl Iterator<Item = &PantryItem> {
        self.items.iter().filter(|i| i.selected)
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.selected().map(|i| i.name.to_owned()).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    pub fn clear(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }

    /// Items grouped by category, categories in first-seen order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&PantryItem>)> {
        let mut groups: Vec<(&str, Vec<&PantryItem>)> = vec![];

        for item in &self.items {
            match groups.iter_mut().find(|(c, _)| *c == item.category) {
                Some((_, items)) => items.push(item),
                None => groups.push((item.category.as_str(), vec![item])),
            }
        }

        groups
    }

    /// Hands the selected names to the matcher; an empty selection is rejected.
    pub fn query(&self) -> Result<PantryQuery> {
        PantryQuery::new(self.selected_names())
    }
}
