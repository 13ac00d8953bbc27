use landscape::{
    geometry::Point2,
    problems::{
        objective::Objective,
        test_functions::{cubic_boundary, Paraboloid},
    },
    solvers::descent::FixedStepDescent,
    view::SurfaceStyle,
    Domain, ViewComposer, ViewConfig,
};
use serde_json::Value;

fn composer() -> ViewComposer {
    ViewComposer::new(ViewConfig {
        resolution: 5,
        ..ViewConfig::default()
    })
    .unwrap()
}

fn f(p: Point2) -> f64 {
    Paraboloid.value(p)
}

#[test]
fn planar_figure_has_contour_and_overlays() {
    let vc = composer();
    let mut panel = vc
        .make_planar_panel(Domain::new(-4.0, 0.0, -2.0, 2.0).unwrap(), f)
        .unwrap();
    let traj = FixedStepDescent::new(0.1, 2)
        .run(&Paraboloid, Point2::new(-4.0, 2.0))
        .unwrap();
    vc.attach_trajectory(&mut panel, &traj, Some("green"));
    vc.attach_default_gradient_field(&mut panel, |p| Paraboloid.gradient(p));

    let fig = panel.to_figure();
    let data = fig["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["type"], "contour");
    assert_eq!(data[0]["contours"]["coloring"], "lines");
    assert_eq!(data[0]["z"].as_array().unwrap().len(), 5);
    assert_eq!(data[0]["z"][0].as_array().unwrap().len(), 5);
    assert_eq!(data[1]["type"], "scatter");
    assert_eq!(data[1]["mode"], "lines+markers");
    assert_eq!(data[1]["line"]["color"], "green");

    let layout = &fig["layout"];
    assert_eq!(layout["width"], 500);
    assert_eq!(layout["template"], "plotly_white");
    assert_eq!(layout["xaxis"]["range"], serde_json::json!([-4.0, 0.0]));
    assert_eq!(layout["yaxis"]["title"]["text"], "x2");
    assert!(layout["title"]["text"].as_str().unwrap().starts_with("x0=[-4, 2]"));

    let arrows = layout["annotations"].as_array().unwrap();
    assert_eq!(arrows.len(), 25);
    assert_eq!(arrows[0]["ax"], -4.0);
    assert_eq!(arrows[0]["ay"], -2.0);
    assert_eq!(arrows[0]["x"], -12.0);
    assert_eq!(arrows[0]["y"], -6.0);
    assert_eq!(arrows[0]["arrowcolor"], "red");
}

#[test]
fn non_finite_values_export_as_null() {
    let vc = composer();
    let panel = vc
        .make_planar_panel(Domain::new(-1.0, 1.0, -1.0, 1.0).unwrap(), |p| 1.0 / p.x1)
        .unwrap();
    let parsed: Value = serde_json::from_str(&panel.to_json().unwrap()).unwrap();
    assert!(parsed["data"][0]["z"][0][2].is_null());
}

#[test]
fn composed_figure_places_cells_side_by_side() {
    let vc = composer();
    let domain = Domain::new(-5.0, 1.0, -3.0, 3.0).unwrap();
    let traj = FixedStepDescent::new(0.1, 4)
        .run(&Paraboloid, Point2::new(-4.0, 2.0))
        .unwrap();

    let mut planar = vc.make_planar_panel(domain, f).unwrap();
    vc.attach_trajectory(&mut planar, &traj, None);
    vc.attach_constraint_curve(&mut planar, cubic_boundary);

    let style = SurfaceStyle {
        opacity: 0.6,
        show_scale: false,
        color_scale: Some("Blues".to_string()),
    };
    let mut volumetric = vc.make_volumetric_panel(domain, f, style).unwrap();
    vc.attach_trajectory(&mut volumetric, &traj, Some("black"));

    let fig = vc.compose(planar, volumetric).unwrap().to_figure();
    let kinds: Vec<&str> = fig["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["contour", "scatter", "scatter", "surface", "scatter3d"]);

    let data = &fig["data"];
    assert_eq!(data[0]["xaxis"], "x");
    assert_eq!(data[3]["scene"], "scene");
    assert_eq!(data[3]["opacity"], 0.6);
    assert_eq!(data[3]["colorscale"], "Blues");
    assert_eq!(data[4]["z"][0], 20.0);
    assert_eq!(data[4]["line"]["color"], "black");

    let layout = &fig["layout"];
    assert_eq!(layout["width"], 1000);
    assert_eq!(layout["height"], 500);
    assert_eq!(layout["grid"]["columns"], 2);
    assert_eq!(layout["meta"]["shared_yaxes"], true);
    assert_eq!(layout["yaxis"]["range"], layout["scene"]["yaxis"]["range"]);
    assert_eq!(layout["scene"]["zaxis"]["title"]["text"], "f(x)");
}
