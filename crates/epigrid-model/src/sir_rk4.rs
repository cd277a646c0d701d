//! The reference SIR model with classical fixed-size RK4 integration.
//!
//! Dynamics, in population fractions:
//!
//! ```text
//! dS/dt = -beta * S * I_eff
//! dI/dt =  beta * S * I_eff - gamma * I
//! dR/dt =  gamma * I
//! ```
//!
//! For the uncoupled step `I_eff = I`. For the neighbor-coupled step,
//! `I_eff = (1 - coupling) * I + coupling * mean(I_neighbors)`, with the
//! neighbor term frozen across all four RK4 substeps (Jacobi-style: every
//! neighbor read is a pre-step read). An empty neighbor list or a zero
//! coupling weight reduces exactly to the uncoupled step.
//!
//! The right-hand side sums to zero by construction, so `S + I + R` is
//! conserved to floating-point precision regardless of parameters.
//!
//! Constructed via the builder pattern: [`SirRk4::builder`].

use epigrid_core::{ModelError, SirCell};

use crate::model::Model;

/// Compartment derivatives at one RK4 substep.
#[derive(Clone, Copy, Debug)]
struct Slope {
    ds: f64,
    di: f64,
    dr: f64,
}

/// Classical SIR dynamics advanced by one RK4 step per call.
#[derive(Clone, Debug)]
pub struct SirRk4 {
    beta: f64,
    gamma: f64,
    coupling: f64,
    dt: f64,
    num_steps: u64,
}

/// Builder for [`SirRk4`].
///
/// Required fields: `beta`, `gamma`, `dt`, and `num_steps`. The coupling
/// weight defaults to 0 (no neighbor influence).
pub struct SirRk4Builder {
    beta: Option<f64>,
    gamma: Option<f64>,
    coupling: f64,
    dt: Option<f64>,
    num_steps: Option<u64>,
}

impl SirRk4 {
    /// Create a new builder for configuring a `SirRk4` model.
    pub fn builder() -> SirRk4Builder {
        SirRk4Builder {
            beta: None,
            gamma: None,
            coupling: 0.0,
            dt: None,
            num_steps: None,
        }
    }

    /// The transmission rate.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// The recovery rate.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// The neighbor coupling weight in `[0, 1]`.
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    /// Compartment derivatives for one substep state.
    ///
    /// `neighbor_mean` is the frozen mean infected fraction of the cell's
    /// pre-step neighbors, or `None` for the uncoupled variant.
    fn slope(&self, cell: SirCell, neighbor_mean: Option<f64>) -> Slope {
        let pressure = match neighbor_mean {
            Some(nb) => (1.0 - self.coupling) * cell.infected() + self.coupling * nb,
            None => cell.infected(),
        };
        let ds = -self.beta * cell.susceptible() * pressure;
        let dr = self.gamma * cell.infected();
        // di = beta*S*I_eff - gamma*I; writing it as -(ds + dr) keeps the
        // three slopes summing to exactly zero.
        let di = -(ds + dr);
        Slope { ds, di, dr }
    }

    /// The substep state `cell + h * slope`.
    fn offset(cell: SirCell, k: Slope, h: f64) -> SirCell {
        SirCell::new(
            cell.susceptible() + h * k.ds,
            cell.infected() + h * k.di,
            cell.recovered() + h * k.dr,
        )
    }

    /// One classical RK4 step of size `dt`.
    fn rk4(&self, cell: SirCell, neighbor_mean: Option<f64>) -> SirCell {
        let h = self.dt;
        let k1 = self.slope(cell, neighbor_mean);
        let k2 = self.slope(Self::offset(cell, k1, h / 2.0), neighbor_mean);
        let k3 = self.slope(Self::offset(cell, k2, h / 2.0), neighbor_mean);
        let k4 = self.slope(Self::offset(cell, k3, h), neighbor_mean);

        let sixth = h / 6.0;
        SirCell::new(
            cell.susceptible() + sixth * (k1.ds + 2.0 * k2.ds + 2.0 * k3.ds + k4.ds),
            cell.infected() + sixth * (k1.di + 2.0 * k2.di + 2.0 * k3.di + k4.di),
            cell.recovered() + sixth * (k1.dr + 2.0 * k2.dr + 2.0 * k3.dr + k4.dr),
        )
    }
}

impl SirRk4Builder {
    /// Set the transmission rate. Must be finite and >= 0.
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Set the recovery rate. Must be finite and >= 0.
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Set the neighbor coupling weight (default 0). Must be in `[0, 1]`.
    pub fn coupling(mut self, coupling: f64) -> Self {
        self.coupling = coupling;
        self
    }

    /// Set the integration step size. Must be finite and > 0.
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Set the total step count for a full run.
    pub fn num_steps(mut self, num_steps: u64) -> Self {
        self.num_steps = Some(num_steps);
        self
    }

    /// Build the model, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `beta`, `gamma`, `dt`, or `num_steps` is not set
    /// - `beta` or `gamma` is negative or non-finite
    /// - `dt` is zero, negative, or non-finite
    /// - `coupling` is outside `[0, 1]` or non-finite
    pub fn build(self) -> Result<SirRk4, String> {
        let beta = self.beta.ok_or_else(|| "beta is required".to_string())?;
        let gamma = self.gamma.ok_or_else(|| "gamma is required".to_string())?;
        let dt = self.dt.ok_or_else(|| "dt is required".to_string())?;
        let num_steps = self
            .num_steps
            .ok_or_else(|| "num_steps is required".to_string())?;

        if !(beta >= 0.0) || !beta.is_finite() {
            return Err(format!("beta must be finite and >= 0, got {beta}"));
        }
        if !(gamma >= 0.0) || !gamma.is_finite() {
            return Err(format!("gamma must be finite and >= 0, got {gamma}"));
        }
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(format!("dt must be finite and > 0, got {dt}"));
        }
        if !(0.0..=1.0).contains(&self.coupling) || !self.coupling.is_finite() {
            return Err(format!(
                "coupling must be in [0, 1], got {}",
                self.coupling
            ));
        }

        Ok(SirRk4 {
            beta,
            gamma,
            coupling: self.coupling,
            dt,
            num_steps,
        })
    }
}

impl Model for SirRk4 {
    fn name(&self) -> &str {
        "SirRk4"
    }

    fn dt(&self) -> f64 {
        self.dt
    }

    fn num_steps(&self) -> u64 {
        self.num_steps
    }

    fn step(&self, cell: SirCell) -> Result<SirCell, ModelError> {
        Ok(self.rk4(cell, None))
    }

    fn step_with_neighbors(
        &self,
        cell: SirCell,
        neighbors: &[SirCell],
    ) -> Result<SirCell, ModelError> {
        if neighbors.is_empty() {
            return self.step(cell);
        }
        let sum: f64 = neighbors.iter().map(|c| c.infected()).sum();
        let mean = sum / neighbors.len() as f64;
        Ok(self.rk4(cell, Some(mean)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(beta: f64, gamma: f64, coupling: f64) -> SirRk4 {
        SirRk4::builder()
            .beta(beta)
            .gamma(gamma)
            .coupling(coupling)
            .dt(0.1)
            .num_steps(100)
            .build()
            .unwrap()
    }

    // ── Builder tests ────────────────────────────────────────

    #[test]
    fn builder_minimal() {
        let m = SirRk4::builder()
            .beta(0.3)
            .gamma(0.1)
            .dt(0.5)
            .num_steps(20)
            .build()
            .unwrap();

        assert_eq!(m.name(), "SirRk4");
        assert_eq!(m.beta(), 0.3);
        assert_eq!(m.gamma(), 0.1);
        assert_eq!(m.coupling(), 0.0);
        assert_eq!(m.dt(), 0.5);
        assert_eq!(m.num_steps(), 20);
    }

    #[test]
    fn builder_rejects_missing_fields() {
        let err = SirRk4::builder().build().unwrap_err();
        assert!(err.contains("beta"));

        let err = SirRk4::builder().beta(0.3).build().unwrap_err();
        assert!(err.contains("gamma"));

        let err = SirRk4::builder().beta(0.3).gamma(0.1).build().unwrap_err();
        assert!(err.contains("dt"));

        let err = SirRk4::builder()
            .beta(0.3)
            .gamma(0.1)
            .dt(0.1)
            .build()
            .unwrap_err();
        assert!(err.contains("num_steps"));
    }

    #[test]
    fn builder_rejects_negative_rates() {
        let err = SirRk4::builder()
            .beta(-0.1)
            .gamma(0.1)
            .dt(0.1)
            .num_steps(1)
            .build()
            .unwrap_err();
        assert!(err.contains("beta"));

        let err = SirRk4::builder()
            .beta(0.1)
            .gamma(-0.1)
            .dt(0.1)
            .num_steps(1)
            .build()
            .unwrap_err();
        assert!(err.contains("gamma"));
    }

    #[test]
    fn builder_rejects_bad_dt() {
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = SirRk4::builder()
                .beta(0.1)
                .gamma(0.1)
                .dt(dt)
                .num_steps(1)
                .build()
                .unwrap_err();
            assert!(err.contains("dt"), "dt={dt} should be rejected: {err}");
        }
    }

    #[test]
    fn builder_rejects_bad_coupling() {
        for coupling in [-0.1, 1.1, f64::NAN] {
            let err = SirRk4::builder()
                .beta(0.1)
                .gamma(0.1)
                .coupling(coupling)
                .dt(0.1)
                .num_steps(1)
                .build()
                .unwrap_err();
            assert!(err.contains("coupling"));
        }
    }

    #[test]
    fn builder_rejects_nan_rates() {
        let err = SirRk4::builder()
            .beta(f64::NAN)
            .gamma(0.1)
            .dt(0.1)
            .num_steps(1)
            .build()
            .unwrap_err();
        assert!(err.contains("beta"));
    }

    // ── Dynamics tests ───────────────────────────────────────

    #[test]
    fn population_is_conserved() {
        let m = model(0.6, 0.2, 0.0);
        let mut cell = SirCell::new(0.95, 0.05, 0.0);
        for _ in 0..500 {
            cell = m.step(cell).unwrap();
            assert!(
                (cell.total() - 1.0).abs() < 1e-12,
                "population drifted to {}",
                cell.total()
            );
        }
    }

    #[test]
    fn infection_wave_shape() {
        // beta >> gamma: infections rise while susceptibles fall, and the
        // recovered share never decreases.
        let m = model(1.5, 0.25, 0.0);
        let mut cell = SirCell::new(0.99, 0.01, 0.0);
        let first = m.step(cell).unwrap();
        assert!(first.infected() > cell.infected());
        assert!(first.susceptible() < cell.susceptible());

        let mut prev_r = 0.0;
        for _ in 0..300 {
            cell = m.step(cell).unwrap();
            assert!(cell.recovered() >= prev_r, "recovered share decreased");
            prev_r = cell.recovered();
        }
        // Long after the peak, the epidemic has burned out.
        assert!(cell.infected() < 0.01);
    }

    #[test]
    fn pure_recovery_matches_exponential_decay() {
        // With beta = 0, I(t) = I0 * exp(-gamma * t) exactly; one RK4 step
        // of size h carries O(h^5) local error.
        let gamma = 0.5;
        let m = model(0.0, gamma, 0.0);
        let cell = SirCell::new(0.9, 0.1, 0.0);

        let stepped = m.step(cell).unwrap();
        let exact = 0.1 * (-gamma * m.dt()).exp();
        assert!(
            (stepped.infected() - exact).abs() < 1e-9,
            "RK4 step {} vs exact {}",
            stepped.infected(),
            exact
        );
        // Susceptibles untouched when beta = 0.
        assert_eq!(stepped.susceptible(), 0.9);
    }

    #[test]
    fn empty_neighbor_list_equals_uncoupled() {
        let m = model(0.6, 0.2, 0.8);
        let cell = SirCell::new(0.9, 0.1, 0.0);
        let plain = m.step(cell).unwrap();
        let coupled = m.step_with_neighbors(cell, &[]).unwrap();
        assert_eq!(plain, coupled);
    }

    #[test]
    fn zero_coupling_ignores_neighbors() {
        let m = model(0.6, 0.2, 0.0);
        let cell = SirCell::new(0.9, 0.1, 0.0);
        let hot = [SirCell::new(0.0, 1.0, 0.0)];
        let plain = m.step(cell).unwrap();
        let coupled = m.step_with_neighbors(cell, &hot).unwrap();
        assert_eq!(plain, coupled);
    }

    #[test]
    fn infected_neighbors_seed_an_uninfected_cell() {
        // A cell with no local infections gains some through coupling.
        let m = model(0.6, 0.2, 0.5);
        let cell = SirCell::new(1.0, 0.0, 0.0);
        let hot = [SirCell::new(0.5, 0.5, 0.0)];

        let stepped = m.step_with_neighbors(cell, &hot).unwrap();
        assert!(stepped.infected() > 0.0, "coupling should seed infection");
        assert!(stepped.susceptible() < 1.0);

        // Uncoupled, nothing happens.
        let isolated = m.step(cell).unwrap();
        assert_eq!(isolated, cell);
    }

    #[test]
    fn neighbor_mean_drives_pressure() {
        // Two half-infected neighbors exert the same pressure as one.
        let m = model(0.6, 0.2, 0.5);
        let cell = SirCell::new(0.9, 0.1, 0.0);
        let one = [SirCell::new(0.6, 0.4, 0.0)];
        let two = [SirCell::new(0.6, 0.4, 0.0), SirCell::new(0.6, 0.4, 0.0)];
        let a = m.step_with_neighbors(cell, &one).unwrap();
        let b = m.step_with_neighbors(cell, &two).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn coupled_population_is_conserved() {
        let m = model(0.8, 0.3, 0.6);
        let hot = [SirCell::new(0.2, 0.8, 0.0), SirCell::new(0.7, 0.3, 0.0)];
        let mut cell = SirCell::new(0.99, 0.01, 0.0);
        for _ in 0..200 {
            cell = m.step_with_neighbors(cell, &hot).unwrap();
            assert!((cell.total() - 1.0).abs() < 1e-12);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn conservation_holds_for_arbitrary_states(
                s in 0.0f64..1.0,
                i in 0.0f64..1.0,
                beta in 0.0f64..2.0,
                gamma in 0.0f64..2.0,
                coupling in 0.0f64..=1.0,
                nb_i in 0.0f64..1.0,
            ) {
                let r = (1.0 - s - i).max(0.0);
                let m = SirRk4::builder()
                    .beta(beta)
                    .gamma(gamma)
                    .coupling(coupling)
                    .dt(0.05)
                    .num_steps(1)
                    .build()
                    .unwrap();
                let cell = SirCell::new(s, i, r);
                let nb = [SirCell::new(1.0 - nb_i, nb_i, 0.0)];

                let out = m.step_with_neighbors(cell, &nb).unwrap();
                prop_assert!(out.is_finite());
                prop_assert!((out.total() - cell.total()).abs() < 1e-10);
            }
        }
    }
}
