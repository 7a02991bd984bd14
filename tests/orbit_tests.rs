// Host-side tests for camera orbit math and the orbit controller.

mod common;

use common::{approx_eq, FakeViewer};
use phone_viewer::constants::{ORBIT_MAX_RADIUS_M, ORBIT_MIN_RADIUS_M};
use phone_viewer::core::{CameraOrbit, OrbitAction, OrbitController, ViewerError};

fn controller_at(orbit: CameraOrbit) -> (OrbitController<FakeViewer>, FakeViewer) {
    let viewer = FakeViewer::with_orbit(orbit);
    let mut controller = OrbitController::new();
    controller.attach(viewer.clone());
    (controller, viewer)
}

#[test]
fn rotate_left_and_right_step_azimuth_only() {
    let start = CameraOrbit::new(1.0, 1.2, 3.0);
    let (controller, viewer) = controller_at(start);

    let left = controller.rotate_left().unwrap();
    assert!(approx_eq(left.theta, 0.5));
    assert_eq!(left.phi, 1.2);
    assert_eq!(left.radius, 3.0);
    assert_eq!(viewer.current_orbit(), Some(left));

    controller.rotate_right();
    let right = controller.rotate_right().unwrap();
    assert!(approx_eq(right.theta, 1.5));
    assert_eq!(right.phi, 1.2);
    assert_eq!(right.radius, 3.0);
}

#[test]
fn rotate_right_then_left_returns_to_start() {
    let (controller, viewer) = controller_at(CameraOrbit::new(0.785, 1.3, 2.5));
    controller.rotate_right();
    controller.rotate_left();
    let end = viewer.current_orbit().unwrap();
    assert!((end.theta - 0.785).abs() < 1e-9);
}

#[test]
fn zoom_steps_radius_and_keeps_angles() {
    let (controller, _viewer) = controller_at(CameraOrbit::new(0.3, 1.1, 4.0));
    let zin = controller.zoom_in().unwrap();
    assert_eq!((zin.theta, zin.phi, zin.radius), (0.3, 1.1, 3.5));
    controller.zoom_out();
    let zout = controller.zoom_out().unwrap();
    assert_eq!((zout.theta, zout.phi, zout.radius), (0.3, 1.1, 4.5));
}

#[test]
fn zoom_in_four_times_from_default_radius_hits_floor() {
    let (controller, viewer) = controller_at(CameraOrbit::new(0.0, 1.0, 2.5));
    let radii: Vec<f64> = (0..4).map(|_| controller.zoom_in().unwrap().radius).collect();
    assert_eq!(radii, vec![2.0, 1.5, 1.0, 1.0]);
    assert_eq!(viewer.orbit_writes(), 4);
}

#[test]
fn repeated_zoom_never_leaves_bounds() {
    let (controller, _viewer) = controller_at(CameraOrbit::new(0.0, 1.0, 5.0));
    for _ in 0..50 {
        let r = controller.zoom_in().unwrap().radius;
        assert!(r >= ORBIT_MIN_RADIUS_M);
    }
    assert_eq!(controller.zoom_in().unwrap().radius, ORBIT_MIN_RADIUS_M);
    for _ in 0..50 {
        let r = controller.zoom_out().unwrap().radius;
        assert!(r <= ORBIT_MAX_RADIUS_M);
    }
    assert_eq!(controller.zoom_out().unwrap().radius, ORBIT_MAX_RADIUS_M);
}

#[test]
fn zoom_clamps_only_in_their_own_direction() {
    // A radius outside the range (e.g. from user scrolling) is stepped, not snapped.
    let far = CameraOrbit::new(0.0, 1.0, 12.0).zoomed_in(0.5);
    assert_eq!(far.radius, 11.5);
    let near = CameraOrbit::new(0.0, 1.0, 0.6).zoomed_out(0.5);
    assert!(approx_eq(near.radius, 1.1));
}

#[test]
fn reset_delegates_to_viewer() {
    let home = CameraOrbit::new(0.2, 1.0, 2.0);
    let (controller, viewer) = controller_at(home);
    controller.rotate_left();
    controller.zoom_out();
    assert!(controller.reset());
    assert_eq!(viewer.resets(), 1);
    assert_eq!(viewer.current_orbit(), Some(home));
    // reset is not a locally computed orbit write
    assert_eq!(viewer.orbit_writes(), 2);
}

#[test]
fn operations_before_attach_are_noops() {
    let controller: OrbitController<FakeViewer> = OrbitController::new();
    assert!(!controller.is_ready());
    assert_eq!(controller.rotate_left(), None);
    assert_eq!(controller.rotate_right(), None);
    assert_eq!(controller.zoom_in(), None);
    assert_eq!(controller.zoom_out(), None);
    assert!(!controller.reset());
}

#[test]
fn operations_are_noops_when_viewer_reports_no_orbit() {
    let viewer = FakeViewer::default();
    let mut controller = OrbitController::new();
    controller.attach(viewer.clone());
    assert_eq!(controller.zoom_in(), None);
    assert_eq!(viewer.orbit_writes(), 0);
}

#[test]
fn detach_makes_controller_inert_again() {
    let (mut controller, viewer) = controller_at(CameraOrbit::new(0.0, 1.0, 2.0));
    assert!(controller.detach().is_some());
    assert_eq!(controller.zoom_out(), None);
    assert_eq!(viewer.orbit_writes(), 0);
}

#[test]
fn apply_dispatches_each_action() {
    let (controller, viewer) = controller_at(CameraOrbit::new(1.0, 1.0, 2.0));
    assert!(approx_eq(controller.apply(OrbitAction::RotateLeft).unwrap().theta, 0.5));
    assert!(approx_eq(controller.apply(OrbitAction::RotateRight).unwrap().theta, 1.0));
    assert_eq!(controller.apply(OrbitAction::ZoomIn).unwrap().radius, 1.5);
    assert_eq!(controller.apply(OrbitAction::ZoomOut).unwrap().radius, 2.0);
    assert_eq!(controller.apply(OrbitAction::Reset), None);
    assert_eq!(viewer.resets(), 1);
}

#[test]
fn orbit_formats_as_camera_orbit_string() {
    let orbit = CameraOrbit::new(0.5, 1.25, 2.5);
    assert_eq!(orbit.to_string(), "0.5rad 1.25rad 2.5m");
    assert_eq!(CameraOrbit::new(-1.0, 0.0, 10.0).to_string(), "-1rad 0rad 10m");
}

#[test]
fn orbit_parses_units() {
    let o: CameraOrbit = "45deg 75deg 2.5m".parse().unwrap();
    assert!(approx_eq(o.theta, 45f64.to_radians()));
    assert!(approx_eq(o.phi, 75f64.to_radians()));
    assert_eq!(o.radius, 2.5);

    let o: CameraOrbit = "  0.5rad   1rad 150cm ".parse().unwrap();
    assert_eq!((o.theta, o.phi), (0.5, 1.0));
    assert!(approx_eq(o.radius, 1.5));

    let o: CameraOrbit = "0rad 0rad 250mm".parse().unwrap();
    assert!(approx_eq(o.radius, 0.25));
}

#[test]
fn formatted_orbit_parses_back() {
    let orbit = CameraOrbit::default_pose().rotated(0.5).zoomed_in(0.5);
    let back: CameraOrbit = orbit.to_string().parse().unwrap();
    assert_eq!(back, orbit);
}

#[test]
fn orbit_rejects_malformed_strings() {
    for s in [
        "",
        "auto auto auto",
        "1rad 1rad",
        "1rad 1rad 1m 1m",
        "1 1 1",
        "1m 1rad 1m",
        "1rad 1rad 1deg",
        "xrad 1rad 1m",
        "NaNrad 1rad 1m",
    ] {
        assert_eq!(
            s.parse::<CameraOrbit>(),
            Err(ViewerError::InvalidOrbit(s.to_string())),
            "accepted {s:?}"
        );
    }
}

#[test]
fn default_pose_is_45_75_2_5() {
    let pose = CameraOrbit::default_pose();
    assert!(approx_eq(pose.theta, std::f64::consts::FRAC_PI_4));
    assert!(approx_eq(pose.phi, 75f64.to_radians()));
    assert_eq!(pose.radius, 2.5);
}
