//! Headless scenario driver for the tug maneuvering core: loads a timed
//! command script, runs the tick loop at a fixed rate, and logs what the
//! wheelhouse console would show.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::{info, warn};

use tug::maneuvering::PREDICT_HORIZON_S;
use tug::{
    predict_track, solve_maneuver, step_tug, tugspecs, ControlInput, EngineOrder, ThrusterCommand,
    TugPhysicsSpec, TugState, Vec2f,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "bridge")]
#[command(about = "Headless maneuvering scenario driver", long_about = None)]
pub struct Args {
    /// Scenario file (TOML)
    #[arg(long, default_value = "bridge/scenarios/harbor_turn.toml")]
    pub scenario: PathBuf,
    /// Override the scenario's duration
    #[arg(long)]
    pub duration_secs: Option<f32>,
    /// Tick rate of the driving loop
    #[arg(long, default_value_t = 10.0)]
    pub rate_hz: f32,
    /// Log a predicted track from the final state
    #[arg(long, default_value_t = false)]
    pub predict: bool,
}

/// A timed command script. Entries fire once their time is due and stay in
/// force until replaced.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Tug class to simulate (only "centurion" is built in).
    pub tug: String,
    pub duration_secs: f32,
    pub start: StartPose,
    #[serde(default)]
    pub entries: Vec<ScheduledEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StartPose {
    pub x: f32,
    pub y: f32,
    pub heading_deg: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScheduledEntry {
    pub at_secs: f32,
    /// Engine order resolved through the maneuver solver at fire time.
    #[serde(default)]
    pub order: Option<EngineOrder>,
    /// Explicit unit settings; applied before any order in the same entry.
    #[serde(default)]
    pub port: Option<ThrusterCommand>,
    #[serde(default)]
    pub stbd: Option<ThrusterCommand>,
    /// Manual pivot from this entry on.
    #[serde(default)]
    pub pivot: Option<Vec2f>,
}

#[derive(Debug, Clone, Copy)]
pub struct ScenarioReport {
    pub final_position: Vec2f,
    pub final_heading_deg: f32,
    pub ticks: usize,
    pub rejected_orders: usize,
}

/// Parse a scenario and put its entries in firing order.
pub fn parse_scenario(text: &str) -> Result<Scenario> {
    let mut scenario: Scenario = toml::from_str(text).context("parsing scenario")?;
    scenario
        .entries
        .sort_by(|a, b| a.at_secs.partial_cmp(&b.at_secs).unwrap_or(Ordering::Equal));
    Ok(scenario)
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    parse_scenario(&text).with_context(|| format!("in {}", path.display()))
}

fn spec_for(class: &str) -> Result<TugPhysicsSpec> {
    match class {
        "centurion" => Ok(tugspecs::centurion_spec()),
        other => bail!("unknown tug class {other:?}"),
    }
}

pub fn run_scenario(scenario: &Scenario, args: &Args) -> Result<ScenarioReport> {
    let spec = spec_for(&scenario.tug)?;
    if !(args.rate_hz > 0.0) {
        bail!("tick rate must be positive, got {}", args.rate_hz);
    }
    let dt = 1.0 / args.rate_hz;
    let duration = args.duration_secs.unwrap_or(scenario.duration_secs);
    let ticks_per_log = (args.rate_hz.round() as usize).max(1);

    let mut state = TugState::at_rest(
        Vec2f::new(scenario.start.x, scenario.start.y),
        scenario.start.heading_deg,
    );
    let mut input = ControlInput::default();
    let mut last_pivot = spec.pivot_default;
    let mut next_entry = 0;
    let mut ticks = 0;
    let mut rejected_orders = 0;

    loop {
        let t = ticks as f32 * dt;
        if t >= duration {
            break;
        }

        while next_entry < scenario.entries.len() && scenario.entries[next_entry].at_secs <= t {
            let entry = scenario.entries[next_entry];
            next_entry += 1;
            if let Some(p) = entry.pivot {
                input.pivot_override = Some(p);
            }
            if let Some(cmd) = entry.port {
                input.port = cmd;
            }
            if let Some(cmd) = entry.stbd {
                input.stbd = cmd;
            }
            if let Some(order) = entry.order {
                let pivot = input.pivot_override.unwrap_or(last_pivot);
                match solve_maneuver(&spec, order, pivot) {
                    Ok(settings) => {
                        info!(t, ?order, "Engine order applied");
                        input.port = settings.port;
                        input.stbd = settings.stbd;
                    }
                    Err(err) => {
                        warn!(t, ?order, ?err, "Engine order rejected; holding settings");
                        rejected_orders += 1;
                    }
                }
            }
        }

        let out = step_tug(&spec, &input, &mut state, dt)
            .with_context(|| format!("tick {ticks} failed"))?;
        last_pivot = out.pivot;

        if ticks % ticks_per_log == 0 {
            info!(
                t,
                force_t = out.force_magnitude_t,
                force_dir_deg = out.force_heading_deg,
                moment_tm = out.net_moment_tm,
                rotation = ?out.rotation,
                pivot_y = out.pivot.y,
                heading_deg = state.heading_deg,
                "tick"
            );
        }
        ticks += 1;
    }

    if args.predict {
        let track = predict_track(&spec, &input, &state, PREDICT_HORIZON_S, 1.0)?;
        for p in &track {
            info!(t = p.t, x = p.position.x, y = p.position.y, heading_deg = p.heading_deg, "track");
        }
    }

    Ok(ScenarioReport {
        final_position: state.position,
        final_heading_deg: state.heading_deg,
        ticks,
        rejected_orders,
    })
}
