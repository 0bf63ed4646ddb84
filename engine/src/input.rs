//! Inputs a host can send between ticks.

use std::ops::Range;

/// Overwrite board cells. With `range: None` the values cover the whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBoardStateInput {
    pub new_values: Vec<bool>,
    pub range: Option<Range<usize>>,
}

impl SetBoardStateInput {
    pub fn whole_board(new_values: Vec<bool>) -> Self {
        Self {
            new_values,
            range: None,
        }
    }

    /// Values written starting at `start`.
    pub fn starting_at(start: usize, new_values: Vec<bool>) -> Self {
        let range = start..start + new_values.len();
        Self {
            new_values,
            range: Some(range),
        }
    }
}

/// Change the static noise probability from the next step on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetStaticProbabilityInput {
    pub probability: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostInput {
    SetBoardState(SetBoardStateInput),
    SetStaticProbability(SetStaticProbabilityInput),
}

impl From<SetBoardStateInput> for HostInput {
    fn from(input: SetBoardStateInput) -> Self {
        Self::SetBoardState(input)
    }
}

impl From<SetStaticProbabilityInput> for HostInput {
    fn from(input: SetStaticProbabilityInput) -> Self {
        Self::SetStaticProbability(input)
    }
}
