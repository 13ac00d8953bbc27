use std::fmt;

use serde::Serialize;

use crate::geometry::Point2;

/// One diagnostic row per recorded iterate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolverTraceRecord {
    pub solver: &'static str,
    pub iter: usize,
    pub x: Point2,
    pub f: f64,
    /// Gradient norm at `x`; absent on the final iterate, where no gradient
    /// is evaluated.
    pub grad_norm: Option<f64>,
    pub step_size: f64,
    pub note: Option<&'static str>,
}

impl fmt::Display for SolverTraceRecord {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            out,
            "[{}] iter {:>6} | x1 {:>+13.6e} | x2 {:>+13.6e} | f {:>13.6e}",
            self.solver, self.iter, self.x.x1, self.x.x2, self.f
        )?;
        if let Some(v) = self.grad_norm {
            write!(out, " | grad {:>13.6e}", v)?;
        }
        write!(out, " | step {:>+9.3e}", self.step_size)?;
        if let Some(note) = self.note {
            write!(out, " | note {note}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TraceRow {
    iter: usize,
    x: Point2,
    f: f64,
    grad_norm: Option<f64>,
    note: Option<&'static str>,
}

impl TraceRow {
    pub(crate) fn iter(iter: usize, x: Point2, f: f64) -> Self {
        Self {
            iter,
            x,
            f,
            grad_norm: None,
            note: None,
        }
    }

    pub(crate) fn grad_norm(mut self, grad_norm: f64) -> Self {
        self.grad_norm = Some(grad_norm);
        self
    }

    pub(crate) fn note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

/// Routes trace rows to `tracing` and, optionally, into a history buffer.
#[derive(Clone, Debug)]
pub(crate) struct SolverTracer {
    solver: &'static str,
    step_size: f64,
    verbose: bool,
    history: Option<Vec<SolverTraceRecord>>,
}

impl SolverTracer {
    pub(crate) fn descent(step_size: f64, verbose: bool) -> Self {
        Self {
            solver: "descent",
            step_size,
            verbose,
            history: None,
        }
    }

    pub(crate) fn descent_with_history(step_size: f64, verbose: bool) -> Self {
        Self {
            history: Some(Vec::new()),
            ..Self::descent(step_size, verbose)
        }
    }

    pub(crate) fn emit(&mut self, row: TraceRow) {
        let record = SolverTraceRecord {
            solver: self.solver,
            iter: row.iter,
            x: row.x,
            f: row.f,
            grad_norm: row.grad_norm,
            step_size: self.step_size,
            note: row.note,
        };

        if self.verbose {
            tracing::info!(
                solver = record.solver,
                iter = record.iter,
                x1 = record.x.x1,
                x2 = record.x.x2,
                f = record.f,
                grad_norm = record.grad_norm,
                step_size = record.step_size,
                "{record}"
            );
        } else {
            tracing::debug!(
                solver = record.solver,
                iter = record.iter,
                x1 = record.x.x1,
                x2 = record.x.x2,
                f = record.f,
                grad_norm = record.grad_norm,
                step_size = record.step_size,
            );
        }

        if let Some(history) = &mut self.history {
            history.push(record);
        }
    }

    pub(crate) fn into_history(self) -> Option<Vec<SolverTraceRecord>> {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_kept_only_when_requested() {
        let mut plain = SolverTracer::descent(0.1, false);
        plain.emit(TraceRow::iter(0, Point2::new(1.0, 2.0), 5.0).grad_norm(1.0));
        assert!(plain.into_history().is_none());

        let mut kept = SolverTracer::descent_with_history(0.1, false);
        kept.emit(TraceRow::iter(0, Point2::new(1.0, 2.0), 5.0).grad_norm(1.0));
        kept.emit(TraceRow::iter(1, Point2::new(0.8, 1.6), 3.2).note("final"));
        let rows = kept.into_history().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].grad_norm, Some(1.0));
        assert_eq!(rows[1].note, Some("final"));
        assert_eq!(rows[1].step_size, 0.1);
    }

    #[test]
    fn record_line_mentions_every_present_field() {
        let record = SolverTraceRecord {
            solver: "descent",
            iter: 3,
            x: Point2::new(-2.048, -2.048),
            f: 8.388608,
            grad_norm: None,
            step_size: 0.1,
            note: Some("final"),
        };
        let line = record.to_string();
        assert!(line.starts_with("[descent] iter      3"));
        assert!(line.contains("note final"));
        assert!(!line.contains("grad"));
    }
}
