use landscape::{
    geometry::Point2,
    problems::{
        objective::{FnObjective, Objective},
        test_functions::{cubic_boundary_residual, Paraboloid, Rosenbrock},
    },
    solvers::descent::{iterations_from_signed, run, FixedStepDescent},
    LandscapeError,
};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "{a} vs {b} (tol {tol})");
}

#[test]
fn paraboloid_three_steps() {
    let solver = FixedStepDescent::new(0.1, 3);
    let traj = solver.run(&Paraboloid, Point2::new(-4.0, -4.0)).unwrap();

    let expected_x = [-4.0, -3.2, -2.56, -2.048];
    let expected_f = [32.0, 20.48, 13.1072, 8.388608];
    assert_eq!(traj.len(), 4);
    assert_eq!(traj.iterations(), 3);
    for (it, (x, f)) in traj.iterates().iter().zip(expected_x.iter().zip(expected_f)) {
        assert_close(it.x.x1, *x, 1e-12);
        assert_close(it.x.x2, *x, 1e-12);
        assert_close(it.f, f, 1e-9);
    }

    let result = traj.result();
    assert_eq!(result.x, traj.last().x);
    assert_close(result.f, 8.388608, 1e-9);
    assert!(result.constraint.is_none());
}

#[test]
fn zero_iterations_is_identity() {
    let start = Point2::new(1.5, -0.25);
    let traj = run(start, |p| Paraboloid.value(p), |p| Paraboloid.gradient(p), 0.3, 0).unwrap();

    assert_eq!(traj.len(), 1);
    assert_eq!(traj.start(), start);
    assert_eq!(traj.iterates()[0].f, Paraboloid.value(start));
    assert_eq!(traj.result().x, start);
}

#[test]
fn length_and_start_hold_for_any_count() {
    let obj = Rosenbrock::default();
    let start = Point2::new(-1.2, 1.0);
    for n in [0usize, 1, 2, 7, 50] {
        let traj = FixedStepDescent::new(1e-3, n).run(&obj, start).unwrap();
        assert_eq!(traj.len(), n + 1);
        assert_eq!(traj.start(), start);
    }
}

#[test]
fn every_step_follows_the_update_law() {
    let obj = Rosenbrock::default();
    let step = 1e-3;
    let traj = FixedStepDescent::new(step, 25)
        .run(&obj, Point2::new(-1.2, 1.0))
        .unwrap();

    for pair in traj.iterates().windows(2) {
        let expected = pair[0].x - obj.gradient(pair[0].x) * step;
        assert_close(pair[1].x.x1, expected.x1, 1e-12);
        assert_close(pair[1].x.x2, expected.x2, 1e-12);
        assert_close(pair[1].f, obj.value(pair[1].x), 1e-12);
    }
}

#[test]
fn repeated_runs_are_bitwise_identical() {
    let solver = FixedStepDescent::new(0.01, 100);
    let start = Point2::new(-1.2, 1.0);
    let a = solver.run(&Rosenbrock::default(), start).unwrap();
    let b = solver.run(&Rosenbrock::default(), start).unwrap();

    for (ia, ib) in a.iterates().iter().zip(b.iterates()) {
        assert_eq!(ia.x.x1.to_bits(), ib.x.x1.to_bits());
        assert_eq!(ia.x.x2.to_bits(), ib.x.x2.to_bits());
        assert_eq!(ia.f.to_bits(), ib.f.to_bits());
    }
}

#[test]
fn no_early_stop_at_the_minimizer() {
    // Starting at the minimizer: the gradient is zero but every update is
    // still performed and recorded.
    let traj = FixedStepDescent::new(0.5, 5)
        .run(&Paraboloid, Point2::new(0.0, 0.0))
        .unwrap();
    assert_eq!(traj.len(), 6);
    assert!(traj.points().all(|p| p == Point2::new(0.0, 0.0)));
}

#[test]
fn divergence_is_returned_unmodified() {
    // step 1.5 on x^2 + y^2 multiplies x by -2 each update.
    let traj = FixedStepDescent::new(1.5, 4)
        .run(&Paraboloid, Point2::new(1.0, 0.0))
        .unwrap();
    let xs: Vec<f64> = traj.points().map(|p| p.x1).collect();
    assert_eq!(xs, vec![1.0, -2.0, 4.0, -8.0, 16.0]);

    let nan = run(
        Point2::new(1.0, 1.0),
        |_| f64::NAN,
        |_| Point2::new(f64::NAN, 0.0),
        0.1,
        2,
    )
    .unwrap();
    assert_eq!(nan.len(), 3);
    assert!(nan.last().x.x1.is_nan());
    assert!(nan.last().f.is_nan());
}

#[test]
fn invalid_step_or_count_is_rejected_before_evaluation() {
    let calls = std::cell::Cell::new(0usize);
    let counted = |p: Point2| {
        calls.set(calls.get() + 1);
        p.x1
    };

    for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        let err = run(Point2::default(), counted, |_| Point2::default(), step, 3).unwrap_err();
        assert!(matches!(err, LandscapeError::InvalidStepSize(_)));
    }
    assert_eq!(calls.get(), 0);

    assert!(matches!(
        iterations_from_signed(-1),
        Err(LandscapeError::InvalidIterationCount(-1))
    ));
    assert_eq!(iterations_from_signed(12).unwrap(), 12);
}

#[test]
fn result_reports_constraint_value() {
    let traj = FixedStepDescent::new(0.1, 10)
        .run(&Paraboloid, Point2::new(-4.0, 2.0))
        .unwrap();
    let result = traj.result_with_constraint(cubic_boundary_residual);
    assert_eq!(result.constraint, Some(cubic_boundary_residual(result.x)));
}

#[test]
fn trace_is_collected_on_request() {
    let obj = FnObjective::new(|p: Point2| (p.x1 - 3.0).powi(2), |p: Point2| {
        Point2::new(2.0 * (p.x1 - 3.0), 0.0)
    });

    let plain = FixedStepDescent::new(0.1, 4).run(&obj, Point2::default()).unwrap();
    assert!(plain.trace().is_none());

    let solver = FixedStepDescent {
        collect_trace: true,
        ..FixedStepDescent::new(0.1, 4)
    };
    let traj = solver.run(&obj, Point2::default()).unwrap();
    let trace = traj.trace().unwrap();

    assert_eq!(trace.len(), 5);
    assert_close(trace[0].grad_norm.unwrap(), 6.0, 1e-12);
    assert!(trace[4].grad_norm.is_none());
    assert_eq!(trace[4].note, Some("final"));
    for (row, it) in trace.iter().zip(traj.iterates()) {
        assert_eq!(row.x, it.x);
        assert_eq!(row.f, it.f);
    }
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn log_at_info(solver: &FixedStepDescent) -> String {
    let log = CapturedLog::default();
    let sink = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        solver.run(&Paraboloid, Point2::new(-4.0, -4.0)).unwrap();
    });
    let bytes = log.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn verbose_rows_are_visible_at_info_level() {
    let verbose = FixedStepDescent {
        verbose: true,
        ..FixedStepDescent::new(0.1, 3)
    };
    let out = log_at_info(&verbose);
    let rows: Vec<&str> = out.lines().filter(|l| l.contains("[descent] iter")).collect();
    assert_eq!(rows.len(), 4, "{out}");
    assert!(rows[3].contains("note final"));

    let quiet = log_at_info(&FixedStepDescent::new(0.1, 3));
    assert!(quiet.is_empty(), "{quiet}");
}
