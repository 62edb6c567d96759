//! Fluent builder for constructing a [`Sim`].

use bx_core::{SimConfig, SimRng};
use tracing::info;

use crate::{ComposeParams, CountryWeights, DailyComposer, Sim, SimError, SimResult, StandoutPools};

/// Fluent builder for [`Sim`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Validate the config, seed the run's generator, and draw the run-level
    /// state: country weights first, then the three standout pools.
    pub fn build(self) -> SimResult<Sim> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let mut rng = SimRng::new(self.config.seed);

        let weights = CountryWeights::build(&mut rng);
        let pools = StandoutPools::build(
            &mut rng,
            self.config.commuters,
            self.config.chilled,
            self.config.smugglers,
        )?;
        let params = ComposeParams {
            missing_prob:        self.config.missing_prob,
            misplace_per_day:    self.config.misplace_per_day,
            misplace_max_offset: self.config.misplace_max_offset,
        };

        info!(
            seed = self.config.seed,
            countries = weights.len(),
            commuters = pools.commuters.len(),
            chilled = pools.chilled.len(),
            smugglers = pools.smugglers.len(),
            days = self.config.total_days(),
            "simulation initialised"
        );

        let composer = DailyComposer::new(&weights, pools, params)?;

        Ok(Sim {
            config: self.config,
            rng,
            weights,
            composer,
            current_day: 0,
        })
    }
}
