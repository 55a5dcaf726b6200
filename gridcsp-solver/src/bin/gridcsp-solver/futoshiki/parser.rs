use std::fmt::Write;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum FutoshikiParseError {
    #[error("the board does not contain any rows")]
    EmptyBoard,

    #[error("line {line}: a cell row needs an odd number of tokens, found {found}")]
    EvenTokenCount { line: usize, found: usize },

    #[error("line {line}: expected {expected} tokens, found {found}")]
    WrongTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unknown token '{token}'")]
    UnknownToken { line: usize, token: String },

    #[error("line {line}: cell value {value} is outside 1..={size}")]
    ValueOutOfRange { line: usize, value: i64, size: usize },

    #[error("expected {expected} significant lines, found {found}")]
    WrongLineCount { expected: usize, found: usize },
}

/// The inequality between two neighbouring cells, read from the first cell (left or upper) to the
/// second (right or lower).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Relation {
    Less,
    Greater,
}

/// A square Futoshiki board: the given cell values and the inequalities between neighbours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FutoshikiBoard {
    size: usize,
    /// Row-major, [`None`] for an empty cell.
    cells: Vec<Option<i32>>,
    /// `horizontal[row * (size - 1) + col]` is between `(row, col)` and `(row, col + 1)`.
    horizontal: Vec<Option<Relation>>,
    /// `vertical[row * size + col]` is between `(row, col)` and `(row + 1, col)`.
    vertical: Vec<Option<Relation>>,
}

impl FutoshikiBoard {
    /// Parses a board; blank lines and lines starting with `#` are skipped.
    pub(crate) fn parse(source: &str) -> Result<FutoshikiBoard, FutoshikiParseError> {
        let mut lines = source
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .map(|(number, line)| (number, line.split_whitespace().collect::<Vec<_>>()));

        let (first_number, first_tokens) = lines.next().ok_or(FutoshikiParseError::EmptyBoard)?;
        if first_tokens.len() % 2 == 0 {
            return Err(FutoshikiParseError::EvenTokenCount {
                line: first_number,
                found: first_tokens.len(),
            });
        }

        let size = first_tokens.len().div_ceil(2);
        let mut board = FutoshikiBoard {
            size,
            cells: Vec::with_capacity(size * size),
            horizontal: Vec::with_capacity(size * (size - 1)),
            vertical: Vec::with_capacity((size - 1) * size),
        };

        board.parse_cell_row(first_number, &first_tokens)?;
        let mut num_lines = 1;

        for (number, tokens) in lines {
            num_lines += 1;
            if num_lines > 2 * size - 1 {
                continue;
            }

            if num_lines % 2 == 1 {
                board.parse_cell_row(number, &tokens)?;
            } else {
                board.parse_vertical_row(number, &tokens)?;
            }
        }

        if num_lines != 2 * size - 1 {
            return Err(FutoshikiParseError::WrongLineCount {
                expected: 2 * size - 1,
                found: num_lines,
            });
        }

        Ok(board)
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<i32> {
        self.cells[row * self.size + col]
    }

    /// Every inequality of the board as `(smaller, larger)` pairs of `(row, col)` positions.
    pub(crate) fn inequalities(&self) -> Vec<((usize, usize), (usize, usize))> {
        let mut inequalities = Vec::new();

        for row in 0..self.size {
            for col in 0..self.size {
                if col + 1 < self.size {
                    if let Some(relation) = self.horizontal(row, col) {
                        inequalities.push(ordered(relation, (row, col), (row, col + 1)));
                    }
                }
                if row + 1 < self.size {
                    if let Some(relation) = self.vertical(row, col) {
                        inequalities.push(ordered(relation, (row, col), (row + 1, col)));
                    }
                }
            }
        }

        inequalities
    }

    /// Renders the board with the given value in every cell, in the same format which is parsed.
    pub(crate) fn render(&self, value: impl Fn(usize, usize) -> i32) -> String {
        let mut rendered = String::new();

        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    let symbol = match self.horizontal(row, col - 1) {
                        Some(Relation::Less) => '<',
                        Some(Relation::Greater) => '>',
                        None => '.',
                    };
                    let _ = write!(rendered, " {symbol} ");
                }
                let _ = write!(rendered, "{}", value(row, col));
            }
            rendered.push('\n');

            if row + 1 < self.size {
                let symbols = (0..self.size)
                    .map(|col| match self.vertical(row, col) {
                        Some(Relation::Less) => "^",
                        Some(Relation::Greater) => "v",
                        None => ".",
                    })
                    .collect::<Vec<_>>();
                rendered.push_str(&symbols.join("   "));
                rendered.push('\n');
            }
        }

        rendered
    }

    fn horizontal(&self, row: usize, col: usize) -> Option<Relation> {
        self.horizontal[row * (self.size - 1) + col]
    }

    fn vertical(&self, row: usize, col: usize) -> Option<Relation> {
        self.vertical[row * self.size + col]
    }

    fn parse_cell_row(&mut self, line: usize, tokens: &[&str]) -> Result<(), FutoshikiParseError> {
        expect_token_count(line, tokens, 2 * self.size - 1)?;

        for (position, &token) in tokens.iter().enumerate() {
            if position % 2 == 0 {
                let cell = self.parse_cell(line, token)?;
                self.cells.push(cell);
            } else {
                let relation = match token {
                    "<" => Some(Relation::Less),
                    ">" => Some(Relation::Greater),
                    "." => None,
                    _ => return Err(unknown_token(line, token)),
                };
                self.horizontal.push(relation);
            }
        }

        Ok(())
    }

    fn parse_vertical_row(
        &mut self,
        line: usize,
        tokens: &[&str],
    ) -> Result<(), FutoshikiParseError> {
        expect_token_count(line, tokens, self.size)?;

        for &token in tokens {
            let relation = match token {
                "^" => Some(Relation::Less),
                "v" => Some(Relation::Greater),
                "." => None,
                _ => return Err(unknown_token(line, token)),
            };
            self.vertical.push(relation);
        }

        Ok(())
    }

    fn parse_cell(&self, line: usize, token: &str) -> Result<Option<i32>, FutoshikiParseError> {
        if token == "." || token == "0" {
            return Ok(None);
        }

        let value = token
            .parse::<i64>()
            .map_err(|_| unknown_token(line, token))?;

        if !(1..=self.size as i64).contains(&value) {
            return Err(FutoshikiParseError::ValueOutOfRange {
                line,
                value,
                size: self.size,
            });
        }

        Ok(Some(value as i32))
    }
}

fn ordered(
    relation: Relation,
    first: (usize, usize),
    second: (usize, usize),
) -> ((usize, usize), (usize, usize)) {
    match relation {
        Relation::Less => (first, second),
        Relation::Greater => (second, first),
    }
}

fn expect_token_count(
    line: usize,
    tokens: &[&str],
    expected: usize,
) -> Result<(), FutoshikiParseError> {
    if tokens.len() != expected {
        return Err(FutoshikiParseError::WrongTokenCount {
            line,
            expected,
            found: tokens.len(),
        });
    }

    Ok(())
}

fn unknown_token(line: usize, token: &str) -> FutoshikiParseError {
    FutoshikiParseError::UnknownToken {
        line,
        token: token.to_owned(),
    }
}
