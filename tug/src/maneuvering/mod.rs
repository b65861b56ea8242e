mod util;
mod types;
mod thrust;
mod wash;
mod resultant;
mod geometry;
mod pivot;
mod maneuver;
mod terms;
mod dynamics;

pub use dynamics::{predict_track, step_tug, step_tug_dbg, PREDICT_HORIZON_S};
pub use geometry::{thrust_line_intersection, weighted_centroid};
pub use maneuver::{solve_maneuver, FAST_DRIVE_OFFSET_DEG, PRESET_POWER_PCT, SPIN_OFFSET_DEG};
pub use pivot::estimate_pivot;
pub use resultant::compose;
pub use thrust::thruster_force;
pub use types::{
    InterferenceFlags, PivotEstimate, PivotRegime, Resultant, RotationSense, StepDebug,
    TickOutputs, TrackPoint, TugState, MOMENT_SENSE_DEADBAND_TM,
};
pub use wash::{interference, wash_hits};
