//! The output side of statistic logging.
//!
//! Every statistic is written as a single line `%%%gridcsp-stat: {name}={value}` with the name in
//! camel case, and a block of statistics is closed by `%%%gridcsp-stat-end`.

use std::fmt::Display;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

/// Written before the name of every statistic.
pub const STATISTIC_PREFIX: &str = "%%%gridcsp-stat:";
/// Written after the last statistic of the solver.
pub const STATISTICS_END: &str = "%%%gridcsp-stat-end";

static STATISTIC_OUTPUT: OnceLock<Mutex<Box<dyn Write + Send>>> = OnceLock::new();

/// Enables statistic logging to stdout.
pub fn enable_statistic_logging() {
    enable_statistic_logging_to(std::io::stdout());
}

/// Enables statistic logging to `writer`. Only the first call of this function (or of
/// [`enable_statistic_logging`]) has an effect.
pub fn enable_statistic_logging_to(writer: impl Write + Send + 'static) {
    let _ = STATISTIC_OUTPUT.get_or_init(|| Mutex::new(Box::new(writer)));
}

/// Returns whether statistic logging has been enabled.
pub fn should_log_statistics() -> bool {
    STATISTIC_OUTPUT.get().is_some()
}

/// Logs one statistic line; does nothing while statistic logging is disabled.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if should_log_statistics() {
        write_line(format_statistic(name, value));
    }
}

/// Closes the current block of statistics.
pub fn log_statistics_end() {
    write_line(STATISTICS_END);
}

fn format_statistic(name: impl Display, value: impl Display) -> String {
    let name = name.to_string().to_case(Case::Camel);
    format!("{STATISTIC_PREFIX} {name}={value}")
}

fn write_line(line: impl Display) {
    let Some(output) = STATISTIC_OUTPUT.get() else {
        return;
    };
    if let Ok(mut writer) = output.lock() {
        let _ = writeln!(writer, "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_written_in_camel_case() {
        assert_eq!(
            "%%%gridcsp-stat: numPrunedValues=12",
            format_statistic("num_pruned_values", 12)
        );
        assert_eq!(
            "%%%gridcsp-stat: forwardCheckingNumRevisions=3",
            format_statistic("ForwardChecking_num_revisions", 3)
        );
    }

    #[test]
    fn values_are_written_in_full() {
        assert_eq!(
            "%%%gridcsp-stat: solveTime=0.0125",
            format_statistic("solve_time", 0.0125)
        );
    }
}
