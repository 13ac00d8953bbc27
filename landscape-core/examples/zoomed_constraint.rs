use landscape::{
    geometry::Point2,
    problems::{
        objective::Objective,
        test_functions::{cubic_boundary, cubic_boundary_residual, Rosenbrock},
    },
    solvers::descent::FixedStepDescent,
    view::SurfaceStyle,
    Config, Domain, ViewComposer, ViewConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> landscape::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ViewConfig::from_json_str(r#"{ "resolution": 80, "arrow_color": "gray" }"#)?;
    let composer = ViewComposer::new(config)?;
    let obj = Rosenbrock::default();
    let objective = |p: Point2| obj.value(p);

    let traj = FixedStepDescent::new(1e-3, 500).run(&obj, Point2::new(-1.2, 1.0))?;

    let coarse = Domain::new(-5.0, 2.0, -3.0, 3.0)?;
    let fine = Domain::new(-1.5, 1.5, -0.5, 1.5)?;

    let mut planar = composer.make_planar_panel(coarse, objective)?;
    composer.attach_trajectory_with_constraint(
        &mut planar,
        &traj,
        None,
        cubic_boundary_residual,
    );

    // Drill into the region the run actually visits.
    composer.zoom(&mut planar, fine, objective)?;
    composer.attach_constraint_curve(&mut planar, cubic_boundary);
    composer.attach_default_gradient_field(&mut planar, |p| obj.gradient(p));

    let style = SurfaceStyle {
        opacity: 0.7,
        show_scale: false,
        color_scale: Some("Viridis".to_string()),
    };
    let mut volumetric = composer.make_volumetric_panel(fine, objective, style)?;
    composer.attach_trajectory(&mut volumetric, &traj, Some("red"));

    println!("{}", composer.compose(planar, volumetric)?.to_json()?);
    Ok(())
}
