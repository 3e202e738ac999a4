//! Radial return for a J2 material with linear isotropic hardening.
//!
//! Drives a single material point through increasing deviatoric strain and
//! solves for the plastic-multiplier increment at each plastic step.
//! A step that fails to converge falls back to an elastic update.
//!
//! Run with `RUST_LOG=debug` to see per-step output.
//! `RUST_LOG=radial_solvers=warn` shows only solver diagnostics.

use radial_solvers::equation::secant::{self, Config, Error};
use tracing_subscriber::EnvFilter;

/// Material parameters in MPa.
struct Material {
    shear: f64,
    yield_stress: f64,
    hardening: f64,
}

/// Per-point state carried between steps.
#[derive(Default)]
struct Point {
    /// Equivalent (von Mises) stress accepted at the end of the last step.
    stress: f64,
    /// Accumulated equivalent plastic strain.
    plastic_strain: f64,
}

impl Material {
    fn flow_stress(&self, plastic_strain: f64) -> f64 {
        self.yield_stress + self.hardening * plastic_strain
    }

    fn step(&self, point: &mut Point, strain_increment: f64, config: &Config) {
        let trial = point.stress + 3.0 * self.shear * strain_increment;

        if trial <= self.flow_stress(point.plastic_strain) {
            point.stress = trial;
            tracing::debug!(trial, "elastic step");
            return;
        }

        let plastic_strain = point.plastic_strain;
        let residual =
            |lambda: f64| trial - 3.0 * self.shear * lambda - self.flow_stress(plastic_strain + lambda);

        match secant::solve_unobserved(&residual, 1e-4, config) {
            Ok(solution) => {
                point.plastic_strain += solution.x;
                point.stress = trial - 3.0 * self.shear * solution.x;
                tracing::debug!(
                    lambda = solution.x,
                    iters = solution.iters,
                    stress = point.stress,
                    "plastic step"
                );
            }
            Err(Error::NonConvergence { iters }) => {
                point.stress = trial;
                tracing::info!(iters, "falling back to elastic update");
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let material = Material {
        shear: 80_000.0,
        yield_stress: 300.0,
        hardening: 1_000.0,
    };
    let config = Config::new(1e-12);

    let mut point = Point::default();
    for _ in 0..20 {
        material.step(&mut point, 2.5e-4, &config);
    }

    tracing::info!(
        stress = point.stress,
        plastic_strain = point.plastic_strain,
        "final state"
    );
}
