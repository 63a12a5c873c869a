mod models;
mod os_signal_termination;
mod result;

use std::fmt::Display;
use std::io::Write;
use std::time::Duration;

use bramble_solver::branching::create_brancher;
use bramble_solver::branching::Brancher;
use bramble_solver::branching::ValueOrdering;
use bramble_solver::branching::VariableOrdering;
use bramble_solver::convert_case::Case;
use bramble_solver::optimisation::OptimisationDirection;
use bramble_solver::options::BacktrackingDiscipline;
use bramble_solver::options::RestartOptions;
use bramble_solver::options::SequenceGeneratorType;
use bramble_solver::options::SolutionPoolCapacity;
use bramble_solver::options::SolverOptions;
use bramble_solver::results::IteratedSolution;
use bramble_solver::results::OptimisationResult;
use bramble_solver::results::SatisfactionResult;
use bramble_solver::statistics::configure_statistic_logging;
use bramble_solver::termination::Combinator;
use bramble_solver::termination::DecisionBudget;
use bramble_solver::termination::FailBudget;
use bramble_solver::termination::SolutionBudget;
use bramble_solver::termination::TerminationCondition;
use bramble_solver::termination::TimeBudget;
use bramble_solver::variables::DomainId;
use bramble_solver::Solution;
use bramble_solver::Solver;
use clap::Parser;
use clap::ValueEnum;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use models::Model;
use models::ModelKind;
use os_signal_termination::OsSignal;
use result::BrambleResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The model to solve, one of:
    ///  - 'queens': place `size` non-attacking queens on a `size` by `size` board,
    ///  - 'pigeonhole': put `size + 1` pigeons in `size` holes (no solution exists),
    ///  - 'knapsack': choose among `size` items to maximise their value,
    ///  - 'table': a binary table constraint over two small variables.
    #[clap(verbatim_doc_comment)]
    model: String,

    /// The size parameter of the model; ignored by 'table'.
    ///
    /// Possible values: usize
    #[arg(short = 'n', long = "size", default_value_t = 8, verbatim_doc_comment)]
    size: usize,

    /// Which variable the search branches on next.
    #[arg(long, value_enum, default_value_t = VariableOrdering::FirstFail)]
    variable_ordering: VariableOrdering,

    /// How the domain of the selected variable is split.
    #[arg(long, value_enum, default_value_t)]
    value_ordering: ValueOrdering,

    /// How the search restores a node when it backtracks to it.
    ///
    /// - "trailing" saves the state before every branch
    /// - "recomputation" saves the state every `--recomputation-interval` levels and re-applies
    ///   the decisions in between
    #[arg(long, value_enum, default_value_t, verbatim_doc_comment)]
    discipline: Discipline,

    /// The distance, in decisions, between saved states under recomputation.
    ///
    /// Possible values: u32
    #[arg(long, default_value_t = 4, verbatim_doc_comment)]
    recomputation_interval: u32,

    /// Stop after this many decisions.
    #[arg(long = "decision-limit")]
    decision_limit: Option<u64>,

    /// Stop after this many failures.
    #[arg(long = "fail-limit")]
    fail_limit: Option<u64>,

    /// Stop after this many solutions.
    #[arg(long = "solution-limit")]
    solution_limit: Option<u64>,

    /// The time budget for the search, in milliseconds.
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// Report every solution instead of the first one. Ignored for optimisation models.
    #[arg(short = 'a', long = "all-solutions")]
    all_solutions: bool,

    /// The sequence on which restarts are performed; restarts are off when it is not given.
    ///
    /// - The "constant" approach restarts every `--restart-base-interval` failures
    /// - The "geometric" approach multiplies the interval by `--restart-geometric-coef` after
    ///   every restart
    /// - The "luby" approach uses the sequence 1, 1, 2, 1, 1, 2, 4, 1, ... (see "Optimal
    ///   speedup of Las Vegas algorithms - Luby et al. (1993)")
    #[arg(long, value_enum, verbatim_doc_comment)]
    restart_sequence_generator_type: Option<SequenceGeneratorType>,

    /// The multiplier of the restart sequence.
    ///
    /// Possible values: u64
    #[arg(long = "restart-base-interval", default_value_t = 100, verbatim_doc_comment)]
    restart_base_interval: u64,

    /// The factor of the geometric restart sequence.
    ///
    /// Possible values: f64
    #[arg(long = "restart-geometric-coef", default_value_t = 1.5, verbatim_doc_comment)]
    restart_geometric_coef: f64,

    /// The seed of the random choices made by randomised branching.
    #[arg(short = 'r', long = "random-seed", default_value_t = 42)]
    random_seed: u64,

    /// Log the search statistics after solving.
    #[arg(short = 's', long = "log-statistics")]
    log_statistics: bool,

    /// Log what the solver is doing.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Discipline {
    #[default]
    Trailing,
    Recomputation,
}

/// The final line of the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Satisfiable,
    Unsatisfiable,
    Optimal,
    Unknown,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Satisfiable => write!(f, "SATISFIABLE"),
            Status::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Status::Optimal => write!(f, "OPTIMAL"),
            Status::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%%stat:", None, Some(Case::Snake), None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> BrambleResult<()> {
    let args = Args::parse();
    configure_logging(args.verbose, args.log_statistics);

    if bramble_solver::asserts::BRAMBLE_ASSERT_LEVEL_DEFINITION
        >= bramble_solver::asserts::BRAMBLE_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the Bramble assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            bramble_solver::asserts::BRAMBLE_ASSERT_LEVEL_DEFINITION
        );
    }

    let model_kind = args.model.parse::<ModelKind>()?;

    let backtracking = match args.discipline {
        Discipline::Trailing => BacktrackingDiscipline::Trailing,
        Discipline::Recomputation => BacktrackingDiscipline::Recomputation {
            interval: args.recomputation_interval,
        },
    };
    let solver_options = SolverOptions {
        backtracking,
        restart_options: RestartOptions {
            sequence_generator_type: args.restart_sequence_generator_type,
            base_interval: args.restart_base_interval,
            geometric_coef: args.restart_geometric_coef,
        },
        random_seed: args.random_seed,
        solution_pool: SolutionPoolCapacity::LastOne,
        statistics_prefix: "",
    };

    let Model {
        mut solver,
        output,
        objective,
    } = model_kind.build(Solver::with_options(solver_options), args.size)?;

    let mut brancher = create_brancher(&output, args.variable_ordering, args.value_ordering);
    let mut termination = Combinator::new(
        OsSignal::install(),
        Combinator::new(
            Combinator::new(
                args.decision_limit.map(DecisionBudget::new),
                args.fail_limit.map(FailBudget::new),
            ),
            Combinator::new(
                args.solution_limit.map(SolutionBudget::new),
                args.time_limit
                    .map(|millis| TimeBudget::starting_now(Duration::from_millis(millis))),
            ),
        ),
    );

    let mut stdout = std::io::stdout().lock();
    let status = match objective {
        Some((direction, objective)) => optimise(
            &mut solver,
            &mut brancher,
            &mut termination,
            (direction, objective),
            &output,
            &mut stdout,
        )?,
        None if args.all_solutions => enumerate(
            &mut solver,
            &mut brancher,
            &mut termination,
            &output,
            &mut stdout,
        )?,
        None => satisfy(
            &mut solver,
            &mut brancher,
            &mut termination,
            &output,
            &mut stdout,
        )?,
    };
    writeln!(stdout, "{status}")?;
    stdout.flush()?;

    if args.log_statistics {
        let objective_value = objective.and_then(|(_, objective)| {
            solver
                .best_solution()
                .map(|solution| solution.value(objective))
        });
        match objective_value {
            Some(value) => solver.log_statistics_with_objective(i64::from(value)),
            None => solver.log_statistics(),
        }
    }

    Ok(())
}

fn satisfy(
    solver: &mut Solver,
    brancher: &mut impl Brancher,
    termination: &mut impl TerminationCondition,
    output: &[DomainId],
    writer: &mut impl Write,
) -> BrambleResult<Status> {
    let status = match solver.find_solution(brancher, termination)? {
        SatisfactionResult::Satisfiable(solution) => {
            print_solution(writer, solver, output, &solution)?;
            Status::Satisfiable
        }
        SatisfactionResult::Unsatisfiable => Status::Unsatisfiable,
        SatisfactionResult::Unknown => Status::Unknown,
    };
    Ok(status)
}

fn enumerate(
    solver: &mut Solver,
    brancher: &mut impl Brancher,
    termination: &mut impl TerminationCondition,
    output: &[DomainId],
    writer: &mut impl Write,
) -> BrambleResult<Status> {
    let mut next = match solver.find_solution(brancher, termination)? {
        SatisfactionResult::Satisfiable(solution) => IteratedSolution::Solution(solution),
        SatisfactionResult::Unsatisfiable => return Ok(Status::Unsatisfiable),
        SatisfactionResult::Unknown => return Ok(Status::Unknown),
    };

    loop {
        match next {
            IteratedSolution::Solution(solution) => {
                print_solution(writer, solver, output, &solution)?;
                next = solver.next_solution(brancher, termination)?;
            }
            // Every solution has been printed, whether or not the enumeration is complete.
            IteratedSolution::Finished | IteratedSolution::Unknown => {
                return Ok(Status::Satisfiable)
            }
        }
    }
}

fn optimise(
    solver: &mut Solver,
    brancher: &mut impl Brancher,
    termination: &mut impl TerminationCondition,
    (direction, objective): (OptimisationDirection, DomainId),
    output: &[DomainId],
    writer: &mut impl Write,
) -> BrambleResult<Status> {
    let status = match solver.find_optimal_solution(brancher, termination, direction, objective)? {
        OptimisationResult::Optimal(solution) => {
            print_solution(writer, solver, output, &solution)?;
            Status::Optimal
        }
        OptimisationResult::Satisfiable(solution) => {
            print_solution(writer, solver, output, &solution)?;
            Status::Satisfiable
        }
        OptimisationResult::Unsatisfiable => Status::Unsatisfiable,
        OptimisationResult::Unknown => Status::Unknown,
    };
    Ok(status)
}

/// Writes `name = value` for every output variable, followed by a separator line.
fn print_solution(
    writer: &mut impl Write,
    solver: &Solver,
    output: &[DomainId],
    solution: &Solution,
) -> std::io::Result<()> {
    for &variable in output {
        let value = solution.value(variable);
        match solver.variable_name(variable) {
            Some(name) => writeln!(writer, "{name} = {value}")?,
            None => writeln!(writer, "{variable} = {value}")?,
        }
    }
    writeln!(writer, "----------")
}
