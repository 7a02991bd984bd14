//! Camera orbit state and the button-driven orbit controller.
//!
//! The orbit itself is owned by the embedded viewer. This module only reads
//! it, computes the next pose and writes it back through [`OrbitTarget`].

use crate::constants::{
    DEFAULT_AZIMUTH_DEG, DEFAULT_POLAR_DEG, DEFAULT_RADIUS_M, ORBIT_MAX_RADIUS_M,
    ORBIT_MIN_RADIUS_M, ORBIT_ROTATE_STEP_RAD, ORBIT_ZOOM_STEP_M,
};
use crate::core::ViewerError;
use std::fmt;
use std::str::FromStr;

/// Spherical camera position around the model origin.
///
/// `theta` is the azimuth and `phi` the polar angle, both in radians;
/// `radius` is in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraOrbit {
    pub theta: f64,
    pub phi: f64,
    pub radius: f64,
}

impl CameraOrbit {
    pub const fn new(theta: f64, phi: f64, radius: f64) -> Self {
        Self { theta, phi, radius }
    }

    pub fn from_degrees(azimuth_deg: f64, polar_deg: f64, radius: f64) -> Self {
        Self::new(azimuth_deg.to_radians(), polar_deg.to_radians(), radius)
    }

    /// Pose applied when the viewer is first mounted.
    pub fn default_pose() -> Self {
        Self::from_degrees(DEFAULT_AZIMUTH_DEG, DEFAULT_POLAR_DEG, DEFAULT_RADIUS_M)
    }

    #[inline]
    pub fn rotated(self, delta_rad: f64) -> Self {
        Self {
            theta: self.theta + delta_rad,
            ..self
        }
    }

    /// Move closer by `step`, never below the minimum radius.
    #[inline]
    pub fn zoomed_in(self, step: f64) -> Self {
        Self {
            radius: (self.radius - step).max(ORBIT_MIN_RADIUS_M),
            ..self
        }
    }

    /// Move away by `step`, never beyond the maximum radius.
    #[inline]
    pub fn zoomed_out(self, step: f64) -> Self {
        Self {
            radius: (self.radius + step).min(ORBIT_MAX_RADIUS_M),
            ..self
        }
    }
}

/// Formats as the viewer's `camera-orbit` string, e.g. `0.5rad 1.2rad 2.5m`.
impl fmt::Display for CameraOrbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad {}rad {}m", self.theta, self.phi, self.radius)
    }
}

/// Parses `<azimuth> <polar> <radius>` with `rad`/`deg` angles and
/// `m`/`cm`/`mm` distances. Keywords such as `auto` are rejected.
impl FromStr for CameraOrbit {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ViewerError::InvalidOrbit(s.to_string());
        let mut parts = s.split_whitespace();
        let (Some(theta), Some(phi), Some(radius), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        Ok(Self {
            theta: parse_angle(theta).ok_or_else(invalid)?,
            phi: parse_angle(phi).ok_or_else(invalid)?,
            radius: parse_length(radius).ok_or_else(invalid)?,
        })
    }
}

fn parse_angle(token: &str) -> Option<f64> {
    if let Some(v) = token.strip_suffix("rad") {
        finite(v)
    } else if let Some(v) = token.strip_suffix("deg") {
        finite(v).map(f64::to_radians)
    } else {
        None
    }
}

fn parse_length(token: &str) -> Option<f64> {
    if let Some(v) = token.strip_suffix("mm") {
        finite(v).map(|x| x / 1000.0)
    } else if let Some(v) = token.strip_suffix("cm") {
        finite(v).map(|x| x / 100.0)
    } else if let Some(v) = token.strip_suffix('m') {
        finite(v)
    } else {
        None
    }
}

#[inline]
fn finite(v: &str) -> Option<f64> {
    v.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Read/write access to a viewer's camera orbit.
///
/// Writes are fire-and-forget: the viewer animates towards the new pose on
/// its own and no completion is reported back.
pub trait OrbitTarget {
    /// Current orbit, or `None` if the viewer cannot report one yet.
    fn orbit(&self) -> Option<CameraOrbit>;
    fn set_orbit(&self, orbit: CameraOrbit);
    /// Return to the viewer's own default turntable pose.
    fn reset_orbit(&self);
}

/// The five orbit buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitAction {
    RotateLeft,
    Reset,
    RotateRight,
    ZoomIn,
    ZoomOut,
}

impl OrbitAction {
    pub const ROTATION: [OrbitAction; 3] = [Self::RotateLeft, Self::Reset, Self::RotateRight];
    pub const ZOOM: [OrbitAction; 2] = [Self::ZoomIn, Self::ZoomOut];
}

/// Applies orbit actions to an attached target.
///
/// Until a target is attached every action is a silent no-op.
pub struct OrbitController<T> {
    target: Option<T>,
}

impl<T> Default for OrbitController<T> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<T: OrbitTarget> OrbitController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, target: T) {
        self.target = Some(target);
    }

    pub fn detach(&mut self) -> Option<T> {
        self.target.take()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Dispatch a button action. Returns the orbit written, if any.
    pub fn apply(&self, action: OrbitAction) -> Option<CameraOrbit> {
        match action {
            OrbitAction::RotateLeft => self.rotate_left(),
            OrbitAction::RotateRight => self.rotate_right(),
            OrbitAction::ZoomIn => self.zoom_in(),
            OrbitAction::ZoomOut => self.zoom_out(),
            OrbitAction::Reset => {
                self.reset();
                None
            }
        }
    }

    pub fn rotate_left(&self) -> Option<CameraOrbit> {
        self.update(|o| o.rotated(-ORBIT_ROTATE_STEP_RAD))
    }

    pub fn rotate_right(&self) -> Option<CameraOrbit> {
        self.update(|o| o.rotated(ORBIT_ROTATE_STEP_RAD))
    }

    pub fn zoom_in(&self) -> Option<CameraOrbit> {
        self.update(|o| o.zoomed_in(ORBIT_ZOOM_STEP_M))
    }

    pub fn zoom_out(&self) -> Option<CameraOrbit> {
        self.update(|o| o.zoomed_out(ORBIT_ZOOM_STEP_M))
    }

    /// Delegates to the viewer's own reset. Returns whether it was issued.
    pub fn reset(&self) -> bool {
        match &self.target {
            Some(target) => {
                target.reset_orbit();
                log::debug!("[orbit] reset");
                true
            }
            None => false,
        }
    }

    fn update(&self, step: impl FnOnce(CameraOrbit) -> CameraOrbit) -> Option<CameraOrbit> {
        let target = self.target.as_ref()?;
        let next = step(target.orbit()?);
        target.set_orbit(next);
        log::debug!("[orbit] camera-orbit={}", next);
        Some(next)
    }
}
