#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use bramble_solver::branching::create_brancher;
use bramble_solver::branching::ValueOrdering;
use bramble_solver::branching::VariableOrdering;
use bramble_solver::constraints;
use bramble_solver::options::BacktrackingDiscipline;
use bramble_solver::options::SolutionPoolCapacity;
use bramble_solver::options::SolverOptions;
use bramble_solver::results::EnumerationResult;
use bramble_solver::termination::Indefinite;
use bramble_solver::variables::DomainId;
use bramble_solver::Solver;

fn queens(size: i32, backtracking: BacktrackingDiscipline) -> (Solver, Vec<DomainId>) {
    let mut solver = Solver::with_options(SolverOptions {
        backtracking,
        solution_pool: SolutionPoolCapacity::All,
        ..Default::default()
    });
    let queens = (0..size)
        .map(|_| solver.new_bounded_variable(0, size - 1))
        .collect::<Vec<_>>();

    for (i, &q1) in queens.iter().enumerate() {
        for (j, &q2) in queens.iter().enumerate().skip(i + 1) {
            let distance = (j - i) as i32;
            for offset in [0, distance, -distance] {
                solver
                    .add_constraint(constraints::not_equals(q1, q2, offset))
                    .post()
                    .expect("no conflict at the root");
            }
        }
    }

    (solver, queens)
}

fn solve_all(
    size: i32,
    backtracking: BacktrackingDiscipline,
    variable_ordering: VariableOrdering,
) -> (EnumerationResult, Vec<Vec<i32>>) {
    let (mut solver, variables) = queens(size, backtracking);
    let mut brancher = create_brancher(&variables, variable_ordering, ValueOrdering::Min);

    let result = solver
        .find_all_solutions(&mut brancher, &mut Indefinite)
        .expect("first solve call");

    let mut solutions = solver
        .solutions()
        .map(|solution| variables.iter().map(|&q| solution.value(q)).collect())
        .collect::<Vec<Vec<i32>>>();
    solutions.sort();
    (result, solutions)
}

#[test]
fn eight_queens_has_92_solutions_under_both_disciplines() {
    for backtracking in [
        BacktrackingDiscipline::Trailing,
        BacktrackingDiscipline::Recomputation { interval: 3 },
    ] {
        let (result, _) = solve_all(8, backtracking, VariableOrdering::FirstFail);
        assert_eq!(
            result,
            EnumerationResult {
                num_solutions: 92,
                complete: true
            },
            "{backtracking:?}"
        );
    }
}

#[test]
fn recomputation_finds_the_same_solutions_as_trailing() {
    for variable_ordering in [
        VariableOrdering::InputOrder,
        VariableOrdering::FirstFail,
        VariableOrdering::Largest,
    ] {
        let (_, trailing) = solve_all(6, BacktrackingDiscipline::Trailing, variable_ordering);

        for interval in [1, 2, 5, 100] {
            let (result, recomputed) = solve_all(
                6,
                BacktrackingDiscipline::Recomputation { interval },
                variable_ordering,
            );

            assert!(result.complete);
            assert_eq!(recomputed, trailing, "{variable_ordering:?}, interval {interval}");
        }
    }
}

#[test]
fn recomputation_replays_decisions() {
    let (mut solver, variables) = queens(6, BacktrackingDiscipline::Recomputation { interval: 4 });
    let mut brancher = create_brancher(&variables, VariableOrdering::InputOrder, ValueOrdering::Min);

    let _ = solver
        .find_all_solutions(&mut brancher, &mut Indefinite)
        .expect("first solve call");

    let statistics = solver.statistics();
    assert!(statistics.num_replayed_decisions > 0);
    assert!(statistics.num_backtracks > 0);
    assert_eq!(statistics.num_solutions, 4);
}

#[test]
fn trailing_never_replays() {
    let (mut solver, variables) = queens(6, BacktrackingDiscipline::Trailing);
    let mut brancher = create_brancher(&variables, VariableOrdering::InputOrder, ValueOrdering::Min);

    let _ = solver
        .find_all_solutions(&mut brancher, &mut Indefinite)
        .expect("first solve call");

    assert_eq!(solver.statistics().num_replayed_decisions, 0);
}
