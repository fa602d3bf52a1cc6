use sparkline_rs::config::ConfigFragment;
use sparkline_rs::core::Viewport;
use sparkline_rs::host::FixedContainer;
use sparkline_rs::render::SvgSurface;
use sparkline_rs::render;

#[test]
fn document_carries_viewport_dimensions() {
    let container = FixedContainer::new(100, 20);
    let mut surface = SvgSurface::new(Viewport::new(100, 20));

    render(
        &container,
        &mut surface,
        &[1.0, 2.0],
        ConfigFragment::default(),
    )
    .expect("render");

    let svg = surface.to_svg_string();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("width=\"100\" height=\"20\""));
    assert!(svg.contains("viewBox=\"0 0 100 20\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn path_data_follows_vertex_order() {
    let container = FixedContainer::new(100, 20);
    let mut surface = SvgSurface::new(Viewport::new(100, 20));

    render(
        &container,
        &mut surface,
        &[1.0, 3.0, 2.0, 5.0, 4.0],
        ConfigFragment::default().with_dot_radius(0.0),
    )
    .expect("render");

    let svg = surface.to_svg_string();
    assert!(svg.contains("d=\"M2,18 L26,10 L50,14 L74,2 L98,6\""));
    assert!(svg.contains("stroke=\"black\""));
    assert!(!svg.contains("<circle"));
}

#[test]
fn closed_area_path_ends_with_a_close_command() {
    let container = FixedContainer::new(100, 20);
    let mut surface = SvgSurface::new(Viewport::new(100, 20));

    render(
        &container,
        &mut surface,
        &[1.0, 3.0, 2.0],
        ConfigFragment::default().with_area_fill("#def"),
    )
    .expect("render");

    let svg = surface.to_svg_string();
    assert!(svg.contains(" Z\""));
    assert!(svg.contains("fill=\"#def\""));
}

#[test]
fn band_renders_behind_the_path() {
    let container = FixedContainer::new(100, 20);
    let mut surface = SvgSurface::new(Viewport::new(100, 20));

    render(
        &container,
        &mut surface,
        &[1.0, 5.0],
        ConfigFragment::default()
            .with_range_min(2.0)
            .with_range_max(4.0)
            .with_range_fill("#eef"),
    )
    .expect("render");

    let svg = surface.to_svg_string();
    let rect_at = svg.find("<rect").expect("rect present");
    let path_at = svg.find("<path").expect("path present");
    assert!(rect_at < path_at);
}

#[test]
fn one_circle_per_emitted_marker() {
    let container = FixedContainer::new(100, 20);
    let mut surface = SvgSurface::new(Viewport::new(100, 20));

    let plan = render(
        &container,
        &mut surface,
        &[1.0, 3.0, 2.0],
        ConfigFragment::default(),
    )
    .expect("render");

    let svg = surface.to_svg_string();
    assert_eq!(svg.matches("<circle").count(), plan.marker_count());
    assert!(svg.contains("r=\"2\""));
}
