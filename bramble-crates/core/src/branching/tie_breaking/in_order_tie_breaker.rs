use super::Direction;
use super::TieBreaker;

/// Keeps the first variable it was offered among those with the best score.
///
/// With [`Direction::Minimum`], offering `x1` and then `x2` with the same score selects `x1`.
#[derive(Debug, Clone)]
pub struct InOrderTieBreaker<Var, Value> {
    selected: Option<(Var, Value)>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let improves = match &self.selected {
            None => true,
            Some((_, best)) => match self.direction {
                Direction::Maximum => value > *best,
                Direction::Minimum => value < *best,
            },
        };
        if improves {
            self.selected = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}
