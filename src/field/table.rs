use super::{ConditionalLogic, Field};
use ahash::AHashMap;

/// The conditional logic of a field set, keyed by field name, in definition order.
///
/// Only fields that carry conditional logic are present. Inserting a name that
/// already exists replaces its logic but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogicTable {
    order: Vec<String>,
    logic: AHashMap<String, ConditionalLogic>,
}

impl LogicTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: &[Field]) -> Self {
        fields
            .iter()
            .filter_map(|field| {
                field
                    .conditional_logic
                    .as_ref()
                    .map(|logic| (field.name.clone(), logic.clone()))
            })
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, logic: ConditionalLogic) {
        let name = name.into();
        if !self.logic.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.logic.insert(name, logic);
    }

    pub fn get(&self, name: &str) -> Option<&ConditionalLogic> {
        self.logic.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.logic.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Field names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConditionalLogic)> {
        self.order
            .iter()
            .filter_map(|name| self.logic.get(name).map(|logic| (name.as_str(), logic)))
    }
}

impl FromIterator<(String, ConditionalLogic)> for LogicTable {
    fn from_iter<I: IntoIterator<Item = (String, ConditionalLogic)>>(iter: I) -> Self {
        let mut table = LogicTable::new();
        for (name, logic) in iter {
            table.insert(name, logic);
        }
        table
    }
}
