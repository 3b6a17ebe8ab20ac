pub const DEFAULT_SEED: u32 = 0;
pub const DEFAULT_STEP_SIZE: f64 = 0.15;
pub const DEFAULT_MOMENTUM: f64 = 0.5;

#[derive(Builder, Clone, Copy, Debug, PartialEq)]
#[builder(pattern = "owned", build_fn(validate = "Self::validate"))]
pub struct TrainerOptions {
    /// Seed of the weight initializer.
    #[builder(default = "DEFAULT_SEED")]
    pub seed: u32,
    /// Learning rate applied to each gradient step.
    #[builder(default = "DEFAULT_STEP_SIZE")]
    pub step_size: f64,
    /// Fraction of the previous weight update carried into the next one.
    #[builder(default = "DEFAULT_MOMENTUM")]
    pub momentum: f64,
}

impl Default for TrainerOptions {
    fn default() -> Self {
        TrainerOptions {
            seed: DEFAULT_SEED,
            step_size: DEFAULT_STEP_SIZE,
            momentum: DEFAULT_MOMENTUM,
        }
    }
}

impl TrainerOptionsBuilder {

    fn validate(&self) -> Result<(), String> {
        if let Some(step_size) = self.step_size {
            if !step_size.is_finite() || step_size < 0.0 {
                return Err(format!("step size must be finite and >= 0, got {}", step_size));
            }
        }
        if let Some(momentum) = self.momentum {
            if !momentum.is_finite() || momentum < 0.0 || momentum >= 1.0 {
                return Err(format!("momentum must be in [0, 1), got {}", momentum));
            }
        }
        Ok(())
    }

}
