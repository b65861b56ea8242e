//! Maneuvering core for a twin azimuth-thruster harbor tug.
//!
//! This crate intentionally avoids any UI or I/O types. It exposes a simple,
//! serializable command/parameter schema a frontend can drive, and plain
//! numeric results (vectors, scalars, a point, a list of poses) it can draw.

mod math;
pub use math::{compass_vector, vector_azimuth_deg, wrap_deg, Vec2f};

mod errors;
pub use errors::{CommandError, SolveError};

mod commands;
pub use commands::{ControlInput, EngineOrder, EngineSettings, Side, ThrusterCommand};

mod tug_specs;
pub use tug_specs::TugPhysicsSpec;
pub use tug_specs::tugspecs;

pub mod maneuvering;
pub use maneuvering::{
    estimate_pivot, interference, predict_track, solve_maneuver, step_tug, step_tug_dbg,
    thruster_force, InterferenceFlags, PivotRegime, RotationSense, StepDebug, TickOutputs,
    TrackPoint, TugState,
};
