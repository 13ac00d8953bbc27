use landscape::{
    geometry::Point2,
    problems::{objective::Objective, test_functions::Paraboloid},
    solvers::descent::FixedStepDescent,
    view::SurfaceStyle,
    Domain, ViewComposer, ViewConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> landscape::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let solver = FixedStepDescent {
        verbose: true,
        ..FixedStepDescent::new(0.1, 10)
    };
    let traj = solver.run(&Paraboloid, Point2::new(-4.0, -4.0))?;

    let result = traj.result();
    println!("x*={} f(x*)={:.3e}", result.x.rounded(3), result.f);

    let composer = ViewComposer::new(ViewConfig::default())?;
    let domain = Domain::new(-5.0, 5.0, -5.0, 5.0)?;
    let objective = |p: Point2| Paraboloid.value(p);

    let mut planar = composer.make_planar_panel(domain, objective)?;
    composer.attach_default_gradient_field(&mut planar, |p| Paraboloid.gradient(p));
    composer.attach_trajectory(&mut planar, &traj, Some("blue"));

    let mut volumetric =
        composer.make_volumetric_panel(domain, objective, SurfaceStyle::default())?;
    composer.attach_trajectory(&mut volumetric, &traj, Some("blue"));

    let view = composer.compose(planar, volumetric)?;
    println!("{}", view.to_json()?);
    Ok(())
}
