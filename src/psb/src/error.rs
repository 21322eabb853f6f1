use core::fmt;

/// Configuration rejected at construction time. Per-step numeric edge
/// cases (collapsed springs, zero volume) are not errors; they are
/// guarded locally and contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
	/// Closed bodies need at least 3 points, chains at least 2.
	PointCount { n: usize, min: usize },
	/// Mass must be positive and finite.
	Mass(f32),
	/// Spring stiffness must be non-negative and finite.
	Stiffness(f32),
	/// Spring damping must be non-negative and finite.
	Damping(f32),
	/// Target pressure must be non-negative and finite.
	Pressure(f32),
	/// Pointer anchor must be finite when set.
	Pointer([f32; 2]),
	/// Body extent (radius, side length, chain span) must be positive.
	Extent(f32),
	/// Domain box must have positive width and height.
	Domain {
		xmin: f32,
		xmax: f32,
		ymin: f32,
		ymax: f32,
	},
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigError::PointCount { n, min } => {
				write!(f, "body needs at least {} points, got {}", min, n)
			}
			ConfigError::Mass(m) => {
				write!(f, "mass must be positive and finite, got {}", m)
			}
			ConfigError::Stiffness(ks) => {
				write!(f, "stiffness must be non-negative and finite, got {}", ks)
			}
			ConfigError::Damping(kd) => {
				write!(f, "damping must be non-negative and finite, got {}", kd)
			}
			ConfigError::Pressure(p) => {
				write!(f, "pressure must be non-negative and finite, got {}", p)
			}
			ConfigError::Pointer(p) => {
				write!(f, "pointer anchor must be finite, got {:?}", p)
			}
			ConfigError::Extent(e) => {
				write!(f, "body extent must be positive, got {}", e)
			}
			ConfigError::Domain {
				xmin,
				xmax,
				ymin,
				ymax,
			} => {
				write!(
					f,
					"domain box must have positive area, got [{}, {}] x [{}, {}]",
					xmin, xmax, ymin, ymax
				)
			}
		}
	}
}

impl std::error::Error for ConfigError {}
