//! The built-in parametric models the binary can solve.
use std::str::FromStr;

use bramble_solver::constraints;
use bramble_solver::constraints::Constraint;
use bramble_solver::optimisation::OptimisationDirection;
use bramble_solver::variables::DomainId;
use bramble_solver::Solver;
use log::debug;

use crate::result::BrambleError;
use crate::result::BrambleResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModelKind {
    /// Place `size` queens on a `size` by `size` board so that none attack each other.
    Queens,
    /// Put `size + 1` pigeons in `size` holes, at most one per hole; has no solution.
    Pigeonhole,
    /// Choose among `size` items to maximise their value within a weight capacity.
    Knapsack,
    /// The binary table `x in [0, 2]`, `y in [-1, 3]` with tuples `(0, -2), (0, 1), (1, 2)`.
    Table,
}

impl FromStr for ModelKind {
    type Err = BrambleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "queens" => Ok(ModelKind::Queens),
            "pigeonhole" => Ok(ModelKind::Pigeonhole),
            "knapsack" => Ok(ModelKind::Knapsack),
            "table" => Ok(ModelKind::Table),
            _ => Err(BrambleError::UnknownModel(name.to_owned())),
        }
    }
}

/// A model posted into a solver, with the variables to print and an optional objective.
#[derive(Debug)]
pub(crate) struct Model {
    pub(crate) solver: Solver,
    pub(crate) output: Vec<DomainId>,
    pub(crate) objective: Option<(OptimisationDirection, DomainId)>,
}

impl ModelKind {
    pub(crate) fn build(self, mut solver: Solver, size: usize) -> BrambleResult<Model> {
        let size = i32::try_from(size)
            .map_err(|_| BrambleError::invalid_model(format!("size {size} is too large")))?;
        if size < 1 && self != ModelKind::Table {
            return Err(BrambleError::invalid_model("the size must be at least 1"));
        }

        let (output, objective) = match self {
            ModelKind::Queens => (queens(&mut solver, size), None),
            ModelKind::Pigeonhole => (pigeonhole(&mut solver, size), None),
            ModelKind::Knapsack => {
                let (items, profit) = knapsack(&mut solver, size);
                let mut output = items;
                output.push(profit);
                (output, Some((OptimisationDirection::Maximise, profit)))
            }
            ModelKind::Table => (table(&mut solver), None),
        };

        Ok(Model {
            solver,
            output,
            objective,
        })
    }
}

/// A model may be infeasible at the root; the solve call reports that, so posting continues.
fn post(solver: &mut Solver, constraint: impl Constraint) {
    if let Err(error) = solver.add_constraint(constraint).post() {
        debug!("Posting a constraint failed: {error}");
    }
}

fn queens(solver: &mut Solver, size: i32) -> Vec<DomainId> {
    let queens = (0..size)
        .map(|row| solver.new_named_bounded_variable(0, size - 1, format!("queen_{row}")))
        .collect::<Vec<_>>();

    for (i, &q1) in queens.iter().enumerate() {
        for (j, &q2) in queens.iter().enumerate().skip(i + 1) {
            let distance = (j - i) as i32;
            post(solver, constraints::binary_not_equals(q1, q2));
            post(solver, constraints::not_equals(q1, q2, distance));
            post(solver, constraints::not_equals(q1, q2, -distance));
        }
    }

    queens
}

fn pigeonhole(solver: &mut Solver, holes: i32) -> Vec<DomainId> {
    let pigeons = (0..=holes)
        .map(|pigeon| solver.new_named_bounded_variable(0, holes - 1, format!("pigeon_{pigeon}")))
        .collect::<Vec<_>>();

    post(solver, constraints::all_different(pigeons.clone()));
    pigeons
}

/// The weight and value of item `index`; spread out so the optimum is not trivial.
fn item(index: i32) -> (i32, i32) {
    let weight = 3 + (index * 7) % 11;
    let value = 4 + (index * 5) % 13;
    (weight, value)
}

fn knapsack(solver: &mut Solver, num_items: i32) -> (Vec<DomainId>, DomainId) {
    let items = (0..num_items)
        .map(|index| solver.new_named_bounded_variable(0, 1, format!("take_{index}")))
        .collect::<Vec<_>>();
    let (weights, values): (Vec<i32>, Vec<i32>) = (0..num_items).map(item).unzip();

    let capacity = weights.iter().sum::<i32>() / 2;
    let max_profit = values.iter().sum::<i32>();
    let profit = solver.new_named_bounded_variable(0, max_profit, "profit");

    post(
        solver,
        constraints::less_than_or_equals(weights, items.clone(), capacity),
    );

    let mut profit_weights = values;
    profit_weights.push(-1);
    let mut profit_terms = items.clone();
    profit_terms.push(profit);
    post(
        solver,
        constraints::linear_equals(profit_weights, profit_terms, 0),
    );

    (items, profit)
}

fn table(solver: &mut Solver) -> Vec<DomainId> {
    let x = solver.new_named_bounded_variable(0, 2, "x");
    let y = solver.new_named_bounded_variable(-1, 3, "y");
    post(solver, constraints::binary_table(x, y, &[(0, -2), (0, 1), (1, 2)]));
    vec![x, y]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_are_parsed() {
        assert_eq!("queens".parse::<ModelKind>().ok(), Some(ModelKind::Queens));
        assert!(matches!(
            "sudoku".parse::<ModelKind>(),
            Err(BrambleError::UnknownModel(name)) if name == "sudoku"
        ));
    }

    #[test]
    fn an_empty_board_is_rejected() {
        assert!(matches!(
            ModelKind::Queens.build(Solver::default(), 0),
            Err(BrambleError::InvalidModel(_))
        ));
    }

    #[test]
    fn the_knapsack_outputs_its_objective_last() {
        let model = ModelKind::Knapsack
            .build(Solver::default(), 4)
            .expect("valid size");

        let (direction, profit) = model.objective.expect("knapsack optimises");
        assert_eq!(direction, OptimisationDirection::Maximise);
        assert_eq!(model.output.last(), Some(&profit));
        assert_eq!(model.solver.variable_name(profit), Some("profit"));
    }
}
