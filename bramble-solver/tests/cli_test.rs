#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::run_solver;
use regex::Regex;

fn status_line(stdout: &str) -> &str {
    stdout
        .lines()
        .filter(|line| !line.starts_with('%'))
        .last()
        .expect("the solver prints a status line")
}

#[test]
fn queens_prints_a_solution_and_status() {
    let run = run_solver("queens", ["queens", "--size", "6"]);
    assert!(run.success);

    let assignment = Regex::new(r"(?m)^queen_(\d+) = (\d+)$").expect("valid regex");
    let rows = assignment
        .captures_iter(&run.stdout)
        .map(|captures| captures[1].parse::<usize>().expect("row"))
        .collect::<Vec<_>>();
    assert_eq!(rows, (0..6).collect::<Vec<_>>());
    assert_eq!(status_line(&run.stdout), "SATISFIABLE");
}

#[test]
fn pigeonhole_is_unsatisfiable() {
    for discipline in ["trailing", "recomputation"] {
        let run = run_solver(
            &format!("pigeonhole-{discipline}"),
            ["pigeonhole", "-n", "4", "--discipline", discipline],
        );
        assert!(run.success);
        assert_eq!(status_line(&run.stdout), "UNSATISFIABLE");
    }
}

#[test]
fn all_solutions_of_the_table_are_listed() {
    let run = run_solver("table", ["table", "--all-solutions"]);
    assert!(run.success);

    let separators = run.stdout.lines().filter(|line| *line == "----------").count();
    assert_eq!(separators, 2);
    assert!(run.stdout.contains("x = 0\ny = 1\n"));
    assert!(run.stdout.contains("x = 1\ny = 2\n"));
    assert_eq!(status_line(&run.stdout), "SATISFIABLE");
}

#[test]
fn knapsack_is_optimal_and_logs_statistics() {
    let run = run_solver("knapsack", ["knapsack", "-n", "8", "--log-statistics"]);
    assert!(run.success);

    let profit = Regex::new(r"(?m)^profit = (\d+)$").expect("valid regex");
    assert!(profit.is_match(&run.stdout));

    let statistic = Regex::new(r"(?m)^%%stat: num_nodes=\d+$").expect("valid regex");
    assert!(statistic.is_match(&run.stdout));
    assert!(run.stdout.contains("%%stat: objective="));
    assert!(run.stdout.contains("OPTIMAL"));
}

#[test]
fn a_zero_time_limit_leaves_the_status_unknown() {
    let run = run_solver("time-limit", ["queens", "-n", "12", "--time-limit", "0"]);
    assert!(run.success);
    assert_eq!(status_line(&run.stdout), "UNKNOWN");
}

#[test]
fn an_unknown_model_fails() {
    let run = run_solver("unknown-model", ["sudoku"]);
    assert!(!run.success);
    assert!(run.stdout.contains("no model named 'sudoku'"));
}
