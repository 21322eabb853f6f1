use crate::error::ConfigError;

/// Directional nudge flags, one per axis direction. Opposite flags
/// cancel exactly.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirFlags {
	pub up: bool,
	pub down: bool,
	pub left: bool,
	pub right: bool,
}

/// Per-tick simulation parameters. `pressure` is the target the world
/// steers its internal pressure towards, not the value used directly
/// by the force pass.
#[derive(Clone, Debug)]
pub struct SimParams {
	pub mass: f32,
	pub ks: f32,
	pub kd: f32,
	pub pressure: f32,
	pub dir: DirFlags,
	pub pointer: Option<[f32; 2]>,
}

impl Default for SimParams {
	fn default() -> Self {
		Self {
			mass: 1.0,
			ks: 755.0,
			kd: 40.0,
			pressure: 70000.0,
			dir: DirFlags::default(),
			pointer: None,
		}
	}
}

impl SimParams {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !self.mass.is_finite() || self.mass <= 0. {
			return Err(ConfigError::Mass(self.mass));
		}
		if !self.ks.is_finite() || self.ks < 0. {
			return Err(ConfigError::Stiffness(self.ks));
		}
		if !self.kd.is_finite() || self.kd < 0. {
			return Err(ConfigError::Damping(self.kd));
		}
		if !self.pressure.is_finite() || self.pressure < 0. {
			return Err(ConfigError::Pressure(self.pressure));
		}
		if let Some(p) = self.pointer {
			if !p[0].is_finite() || !p[1].is_finite() {
				return Err(ConfigError::Pointer(p));
			}
		}
		Ok(())
	}
}
