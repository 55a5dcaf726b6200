mod model;
mod parser;

use std::path::Path;

use gridcsp_solver::options::SolverOptions;
use gridcsp_solver::results::SatisfactionResult;
use gridcsp_solver::termination::TerminationCondition;
use gridcsp_solver::Solution;
use gridcsp_solver::Solver;
use log::info;

use self::model::CellMap;
use self::model::FutoshikiModel;
pub(crate) use self::model::ModelKind;
use self::parser::FutoshikiBoard;
pub(crate) use self::parser::FutoshikiParseError;
use crate::result::SolverResult;

const MSG_SOLUTION_SEPARATOR: &str = "----------";
const MSG_SEARCH_COMPLETE: &str = "==========";
const MSG_UNKNOWN: &str = "=====UNKNOWN=====";
const MSG_UNSATISFIABLE: &str = "=====UNSATISFIABLE=====";

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FutoshikiOptions {
    /// How the rows and columns are modelled.
    pub(crate) model: ModelKind,
    /// Print every solution instead of the first one.
    pub(crate) all_solutions: bool,
    /// Stop after this many solutions; implies enumeration.
    pub(crate) solution_limit: Option<usize>,
}

pub(crate) fn solve(
    instance: impl AsRef<Path>,
    solver_options: SolverOptions,
    mut termination: impl TerminationCondition,
    options: FutoshikiOptions,
) -> SolverResult<()> {
    let source = std::fs::read_to_string(instance)?;
    let board = FutoshikiBoard::parse(&source)?;
    info!("parsed a {0}x{0} board", board.size());

    let FutoshikiModel { csp, cells } = FutoshikiModel::build(&board, options.model)?;
    let mut solver = Solver::new(csp, solver_options);

    if options.all_solutions || options.solution_limit.is_some() {
        let result = solver.enumerate_solutions(
            &mut termination,
            options.solution_limit,
            |solution| print_solution(&board, &cells, solution),
        );

        match (result.num_solutions, result.is_complete) {
            (0, true) => println!("{MSG_UNSATISFIABLE}"),
            (0, false) => println!("{MSG_UNKNOWN}"),
            (_, true) => println!("{MSG_SEARCH_COMPLETE}"),
            (_, false) => {}
        }
    } else {
        match solver.satisfy(&mut termination) {
            SatisfactionResult::Satisfiable(solution) => {
                print_solution(&board, &cells, &solution)
            }
            SatisfactionResult::Unsatisfiable => println!("{MSG_UNSATISFIABLE}"),
            SatisfactionResult::Unknown => println!("{MSG_UNKNOWN}"),
        }
    }

    solver.log_statistics();

    Ok(())
}

fn print_solution(board: &FutoshikiBoard, cells: &CellMap, solution: &Solution) {
    print!("{}", board.render(|row, col| cells.value(solution, row, col)));
    println!("{MSG_SOLUTION_SEPARATOR}");
}
