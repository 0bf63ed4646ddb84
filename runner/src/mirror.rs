use life_engine::{ChangeEvent, ChangeKind};

/// Host-side copy of the board, kept current only from change events.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BoardMirror {
    size: usize,
    cells: Vec<bool>,
    population: usize,
    events_applied: usize,
}

impl BoardMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &ChangeEvent) {
        if event.kind() == ChangeKind::Initialized || event.board_size() != self.size {
            self.size = event.board_size();
            self.cells = vec![false; self.size * self.size];
            self.population = 0;
        }
        for (index, alive) in event.iter() {
            let cell = &mut self.cells[index];
            match (*cell, alive) {
                (false, true) => self.population += 1,
                (true, false) => self.population -= 1,
                _ => {}
            }
            *cell = alive;
        }
        self.events_applied += 1;
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn events_applied(&self) -> usize {
        self.events_applied
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|&alive| if alive { '#' } else { '.' }).collect())
    }
}
