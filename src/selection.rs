pub const MAX_SELECTED: usize = 5;

pub const INGREDIENTS_PARAM: &str = "ingredients";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<String>,
}

impl Selection {
    pub fn from_param(param: Option<&str>) -> Self {
        let items = param
            .unwrap_or_default()
            .split(',')
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();
        Self { items }
    }

    /// Comma-joined form, or `None` when nothing is selected so the caller
    /// drops the parameter instead of leaving it empty.
    pub fn to_param(&self) -> Option<String> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.join(","))
        }
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.items.iter().any(|item| item == entry)
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_SELECTED
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn with_added(&self, entry: &str) -> Self {
        let mut items = self.items.clone();
        items.push(entry.to_owned());
        Self { items }
    }

    pub fn without(&self, entry: &str) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.as_str() != entry)
            .cloned()
            .collect();
        Self { items }
    }
}
