use clap::ValueEnum;
use gridcsp_solver::constraints;
use gridcsp_solver::Csp;
use gridcsp_solver::ModelError;
use gridcsp_solver::Solution;
use gridcsp_solver::VariableId;
use log::debug;

use super::FutoshikiBoard;

/// How the row and column constraints of a board are modelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModelKind {
    /// A not-equals constraint for every pair of cells in the same row or column.
    #[default]
    Binary,
    /// A single all-different constraint per row and per column.
    Nary,
}

/// The CSP of a board together with the variable of every cell.
#[derive(Debug)]
pub(crate) struct FutoshikiModel {
    pub(crate) csp: Csp,
    pub(crate) cells: CellMap,
}

/// Maps the positions of a board to the variables of its model.
#[derive(Clone, Debug)]
pub(crate) struct CellMap {
    size: usize,
    /// Row-major.
    variables: Vec<VariableId>,
}

impl CellMap {
    pub(crate) fn variable(&self, row: usize, col: usize) -> VariableId {
        self.variables[row * self.size + col]
    }

    pub(crate) fn value(&self, solution: &Solution, row: usize, col: usize) -> i32 {
        solution.value(self.variable(row, col))
    }
}

impl FutoshikiModel {
    pub(crate) fn build(board: &FutoshikiBoard, kind: ModelKind) -> Result<Self, ModelError> {
        let size = board.size();
        let mut csp = Csp::default();

        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let name = format!("cell({row},{col})");
                let cell = match board.cell(row, col) {
                    Some(value) => csp.new_variable(name, [value])?,
                    None => csp.new_variable(name, 1..=size as i32)?,
                };
                cells.push(cell);
            }
        }

        let rows = (0..size)
            .map(|row| (0..size).map(|col| cells[row * size + col]).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let columns = (0..size)
            .map(|col| (0..size).map(|row| cells[row * size + col]).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        for (lines, kind_of_line) in [(&rows, "row"), (&columns, "column")] {
            for (index, line) in lines.iter().enumerate() {
                match kind {
                    ModelKind::Binary => {
                        for (i, &x) in line.iter().enumerate() {
                            for &y in &line[i + 1..] {
                                let _ = csp.add_constraint(constraints::not_equals(&csp, x, y))?;
                            }
                        }
                    }
                    ModelKind::Nary => {
                        let name = format!("all_different {kind_of_line} {index}");
                        let constraint = constraints::all_different(&csp, name, line.clone());
                        let _ = csp.add_constraint(constraint)?;
                    }
                }
            }
        }

        for ((smaller_row, smaller_col), (larger_row, larger_col)) in board.inequalities() {
            let smaller = cells[smaller_row * size + smaller_col];
            let larger = cells[larger_row * size + larger_col];
            let _ = csp.add_constraint(constraints::less_than(&csp, smaller, larger))?;
        }

        debug!(
            "built a {kind:?} model with {} variables and {} constraints",
            csp.num_variables(),
            csp.num_constraints()
        );

        Ok(FutoshikiModel {
            csp,
            cells: CellMap {
                size,
                variables: cells,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use gridcsp_solver::results::SatisfactionResult;
    use gridcsp_solver::termination::Indefinite;
    use gridcsp_solver::Solver;

    use super::*;

    fn board(source: &str) -> FutoshikiBoard {
        FutoshikiBoard::parse(source).unwrap()
    }

    #[test]
    fn cells_are_named_by_position() {
        let board = board("2 . .\n. .\n. . .\n");
        let model = FutoshikiModel::build(&board, ModelKind::Binary).unwrap();

        let names = model
            .csp
            .variables()
            .iter()
            .map(|variable| variable.name().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(vec!["cell(0,0)", "cell(0,1)", "cell(1,0)", "cell(1,1)"], names);
    }

    #[test]
    fn given_cells_have_a_singleton_domain() {
        let board = board("2 . .\n. .\n. . .\n");
        let model = FutoshikiModel::build(&board, ModelKind::Binary).unwrap();

        let domains = model
            .csp
            .variables()
            .iter()
            .map(|variable| variable.current_domain().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(vec![vec![2], vec![1, 2], vec![1, 2], vec![1, 2]], domains);
    }

    #[test]
    fn binary_and_nary_models_have_the_expected_constraints() {
        let source = ". < . . .\n. . v\n. . . . .\n. . .\n. . . . .\n";

        let binary = FutoshikiModel::build(&board(source), ModelKind::Binary).unwrap();
        let nary = FutoshikiModel::build(&board(source), ModelKind::Nary).unwrap();

        // 3 pairs per line, 6 lines, plus 2 inequalities.
        assert_eq!(20, binary.csp.num_constraints());
        assert_eq!(8, nary.csp.num_constraints());
    }

    #[test]
    fn both_models_have_the_same_latin_squares() {
        let source = ". . . . .\n. . .\n. . . . .\n. . .\n. . . . .\n";

        for kind in [ModelKind::Binary, ModelKind::Nary] {
            let model = FutoshikiModel::build(&board(source), kind).unwrap();
            let mut solver = Solver::new(model.csp, Default::default());

            let result = solver.enumerate_solutions(&mut Indefinite, None, |_| {});

            assert_eq!(12, result.num_solutions);
        }
    }

    #[test]
    fn inequalities_are_respected_by_the_solution() {
        let board = board(". > . . .\n. . ^\n. . . . .\n. . .\n. . . < .\n");
        let FutoshikiModel { csp, cells } = FutoshikiModel::build(&board, ModelKind::Binary).unwrap();

        let mut solver = Solver::new(csp, Default::default());
        let mut solutions = Vec::new();
        let _ = solver.enumerate_solutions(&mut Indefinite, None, |solution| {
            solutions.push(solution.clone())
        });

        assert!(!solutions.is_empty());
        for solution in &solutions {
            assert!(cells.value(solution, 0, 0) > cells.value(solution, 0, 1));
            assert!(cells.value(solution, 0, 2) < cells.value(solution, 1, 2));
            assert!(cells.value(solution, 2, 1) < cells.value(solution, 2, 2));
        }
    }

    #[test]
    fn cell_map_reads_the_solution_after_the_csp_has_moved() {
        let board = board("1 . .\n. .\n. . .\n");
        let FutoshikiModel { csp, cells } = FutoshikiModel::build(&board, ModelKind::Nary).unwrap();
        assert_eq!("cell(1,0)", csp.variable(cells.variable(1, 0)).name());

        let mut solver = Solver::new(csp, Default::default());
        let SatisfactionResult::Satisfiable(solution) = solver.satisfy(&mut Indefinite) else {
            panic!("a 2x2 board with one given cell has a solution");
        };

        assert_eq!(
            "1 . 2\n.   .\n2 . 1\n",
            board.render(|row, col| cells.value(&solution, row, col))
        );
    }
}
