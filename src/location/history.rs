use super::Location;

pub trait Navigator {
    fn location(&self) -> &Location;

    fn push(&mut self, location: Location);
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

impl History {
    pub fn new(start: Location) -> Self {
        Self {
            entries: vec![start],
            cursor: 0,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        log::debug!("History back to {}", self.entries[self.cursor]);
        true
    }

    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        log::debug!("History forward to {}", self.entries[self.cursor]);
        true
    }

}

impl Navigator for History {
    fn location(&self) -> &Location {
        &self.entries[self.cursor]
    }

    fn push(&mut self, location: Location) {
        log::info!("Navigating to {}", location);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }
}
