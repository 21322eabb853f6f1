use crate::error::ConfigError;
use crate::V2;

/// Axis-aligned simulation domain. Points never leave it; the
/// integrator clamps each axis against it with restitution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Posbox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl Default for Posbox {
	fn default() -> Self {
		Self {
			xmin: 0.,
			xmax: 800.,
			ymin: 0.,
			ymax: 500.,
		}
	}
}

impl Posbox {
	pub fn new(xmin: f32, xmax: f32, ymin: f32, ymax: f32) -> Result<Self, ConfigError> {
		let result = Self {
			xmin,
			xmax,
			ymin,
			ymax,
		};
		result.validate()?;
		Ok(result)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		let finite = self.xmin.is_finite()
			&& self.xmax.is_finite()
			&& self.ymin.is_finite()
			&& self.ymax.is_finite();
		if !finite || self.xmin >= self.xmax || self.ymin >= self.ymax {
			return Err(ConfigError::Domain {
				xmin: self.xmin,
				xmax: self.xmax,
				ymin: self.ymin,
				ymax: self.ymax,
			});
		}
		Ok(())
	}

	pub fn contains(&self, p: V2) -> bool {
		p[0] >= self.xmin && p[0] <= self.xmax && p[1] >= self.ymin && p[1] <= self.ymax
	}
}
