use thiserror::Error;

/// Rejected control input. Out-of-range values are never clamped.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CommandError {
    #[error("thruster power {power_pct}% outside 0..=100")]
    PowerOutOfRange { power_pct: f32 },
    #[error("pivot override ({x}, {y}) outside the hull working bounds")]
    PivotOutOfBounds { x: f32, y: f32 },
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

/// A maneuver solve that produced no usable thruster settings.
/// The previous settings stay in force; the caller surfaces a warning.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SolveError {
    #[error("balancing power {required_pct:.1}% falls outside 0..=100 at pivot y={pivot_y}")]
    Infeasible { required_pct: f32, pivot_y: f32 },
    #[error("net lateral thrust would oppose the ordered side at pivot y={pivot_y}")]
    WrongSide { pivot_y: f32 },
    #[error("{divisor} within epsilon of zero, no closed-form solution")]
    NumericGuard { divisor: &'static str },
}
