mod futoshiki;
mod os_signal_termination;
mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use futoshiki::FutoshikiOptions;
use futoshiki::ModelKind;
use gridcsp_solver::branching::ValueSelection;
use gridcsp_solver::branching::VariableSelection;
use gridcsp_solver::options::SolverOptions;
use gridcsp_solver::propagators::PropagatorKind;
use gridcsp_solver::statistics::enable_statistic_logging;
use gridcsp_solver::termination::Combinator;
use gridcsp_solver::termination::DecisionBudget;
use gridcsp_solver::termination::TimeBudget;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::SolverError;
use result::SolverResult;

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
    /// The Futoshiki board to solve. The file should have the '*.txt' or '*.fut' extension.
    ///
    /// A board of size N consists of 2N-1 lines. Cell rows list the cells ('1'..'N', or '.'/'0'
    /// when empty) separated by '<', '>' or '.'; between them, relation rows list '^' (upper is
    /// smaller), 'v' (upper is larger) or '.' for every column. Blank lines and lines starting
    /// with '#' are ignored.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The propagator which is run after every decision.
    #[arg(long, value_enum, default_value_t)]
    propagator: PropagatorKind,

    /// How the rows and columns of the board are modelled.
    #[arg(long, value_enum, default_value_t)]
    model: ModelKind,

    /// Which unassigned variable is decided on next.
    #[arg(long, value_enum, default_value_t)]
    variable_selection: VariableSelection,

    /// The order in which the values of the decided variable are tried.
    #[arg(long, value_enum, default_value_t)]
    value_selection: ValueSelection,

    /// The seed for the random generator used by the random value selection.
    ///
    /// Possible values: u64
    #[arg(long = "random-seed", default_value_t = 42, verbatim_doc_comment)]
    random_seed: u64,

    /// Instructs the solver to print every solution of the board, followed by '==========' when
    /// the search is complete.
    ///
    /// Possible values: bool
    #[arg(short = 'a', long = "all-solutions", verbatim_doc_comment)]
    all_solutions: bool,

    /// Stop after this many solutions have been printed. Implies the enumeration of solutions.
    ///
    /// Possible values: usize
    #[arg(long = "solution-limit", verbatim_doc_comment)]
    solution_limit: Option<usize>,

    /// The number of decisions after which the search gives up.
    ///
    /// Possible values: u64
    #[arg(long = "decision-limit", verbatim_doc_comment)]
    decision_limit: Option<u64>,

    /// The time budget for the solver, in seconds.
    ///
    /// Possible values: u64
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// Instructs the solver to log the statistics of the search after it has finished.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// Enables logging of the search events of the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        enable_statistic_logging();
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

fn run() -> SolverResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    match args.instance_path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") | Some("fut") => {}
        _ => return Err(SolverError::invalid_instance(args.instance_path.display())),
    }

    if gridcsp_solver::asserts::GRIDCSP_ASSERT_LEVEL_DEFINITION
        >= gridcsp_solver::asserts::GRIDCSP_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the gridcsp assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            gridcsp_solver::asserts::GRIDCSP_ASSERT_LEVEL_DEFINITION
        );
    }

    let solver_options = SolverOptions {
        propagator: args.propagator,
        variable_selection: args.variable_selection,
        value_selection: args.value_selection,
        random_seed: args.random_seed,
    };

    let termination = Combinator::new(
        OsSignal::install()?,
        Combinator::new(
            args.time_limit
                .map(|seconds| TimeBudget::starting_now(Duration::from_secs(seconds))),
            args.decision_limit.map(DecisionBudget::new),
        ),
    );

    futoshiki::solve(
        &args.instance_path,
        solver_options,
        termination,
        FutoshikiOptions {
            model: args.model,
            all_solutions: args.all_solutions,
            solution_limit: args.solution_limit,
        },
    )
}
