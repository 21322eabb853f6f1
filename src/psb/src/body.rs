use std::f32::consts::PI;

use protocol::pr_model::{PrModel, PrPoint, PrSpring};

use crate::error::ConfigError;
use crate::points::PointSet;
use crate::spring::Spring;
use crate::V2;

/// A deformable body: a point set linked by springs. Closed bodies
/// form a loop and are inflated by the pressure pass, open chains are
/// springs only. The default body is empty, a scene placeholder.
#[derive(Clone, Default)]
pub struct Body {
	pub(crate) points: PointSet,
	pub(crate) springs: Vec<Spring>,
	pub(crate) closed: bool,
}

fn link(points: &PointSet, closed: bool) -> Vec<Spring> {
	let n = points.len();
	let count = if closed { n } else { n - 1 };
	let mut springs = Vec::with_capacity(count);
	for i in 0..count {
		let j = (i + 1) % n;
		let l0 = (points.get_pos(j) - points.get_pos(i)).magnitude();
		springs.push(Spring::new(i, j, l0));
	}
	springs
}

fn check_extent(e: f32) -> Result<(), ConfigError> {
	if !e.is_finite() || e <= 0. {
		return Err(ConfigError::Extent(e));
	}
	Ok(())
}

impl Body {
	/// Elliptic ring of `n` points, counterclockwise from the +x axis.
	pub fn new_ring(n: usize, rx: f32, ry: f32, center: V2) -> Result<Self, ConfigError> {
		if n < 3 {
			return Err(ConfigError::PointCount { n, min: 3 });
		}
		check_extent(rx)?;
		check_extent(ry)?;
		let mut points = PointSet::default();
		for i in 0..n {
			let t = 2. * PI * i as f32 / n as f32;
			points.push(center + V2::new(rx * t.cos(), ry * t.sin()));
		}
		let springs = link(&points, true);
		Ok(Self {
			points,
			springs,
			closed: true,
		})
	}

	/// Rectangular ring, `nx` points along each horizontal edge and
	/// `ny` along each vertical edge, corners shared. Counterclockwise
	/// from the lower left corner.
	pub fn new_rect(nx: usize, ny: usize, w: f32, h: f32, center: V2) -> Result<Self, ConfigError> {
		if nx < 2 || ny < 2 {
			return Err(ConfigError::PointCount {
				n: nx.min(ny),
				min: 2,
			});
		}
		check_extent(w)?;
		check_extent(h)?;
		let x0 = center[0] - w / 2.;
		let y0 = center[1] - h / 2.;
		let dx = w / (nx - 1) as f32;
		let dy = h / (ny - 1) as f32;
		let mut points = PointSet::default();
		for i in 0..nx {
			points.push(V2::new(x0 + dx * i as f32, y0));
		}
		for j in 1..ny {
			points.push(V2::new(x0 + w, y0 + dy * j as f32));
		}
		for i in 1..nx {
			points.push(V2::new(x0 + w - dx * i as f32, y0 + h));
		}
		for j in 1..ny - 1 {
			points.push(V2::new(x0, y0 + h - dy * j as f32));
		}
		let springs = link(&points, true);
		Ok(Self {
			points,
			springs,
			closed: true,
		})
	}

	/// Open chain of `n` points from `a` to `b`. Never pressurized.
	pub fn new_chain(n: usize, a: V2, b: V2) -> Result<Self, ConfigError> {
		if n < 2 {
			return Err(ConfigError::PointCount { n, min: 2 });
		}
		let mut points = PointSet::default();
		for i in 0..n {
			let t = i as f32 / (n - 1) as f32;
			points.push(a + (b - a) * t);
		}
		let springs = link(&points, false);
		Ok(Self {
			points,
			springs,
			closed: false,
		})
	}

	pub fn points(&self) -> &PointSet {
		&self.points
	}

	pub fn springs(&self) -> &[Spring] {
		&self.springs
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	pub fn positions(&self) -> Vec<V2> {
		self.points.positions()
	}

	pub fn centroid(&self) -> V2 {
		if self.points.is_empty() {
			return V2::new(0., 0.);
		}
		let mut c = V2::new(0., 0.);
		for p in self.points.pos.iter() {
			c += *p;
		}
		c / self.points.len() as f32
	}

	/// Current perimeter, summed over springs.
	pub fn perimeter(&self) -> f32 {
		self.springs
			.iter()
			.map(|s| (self.points.pos[s.p2] - self.points.pos[s.p1]).magnitude())
			.sum()
	}

	pub fn pr_model(&self) -> PrModel {
		let points = self
			.points
			.pos
			.iter()
			.map(|p| PrPoint { pos: [p[0], p[1]] })
			.collect();
		let springs = self
			.springs
			.iter()
			.map(|s| PrSpring { ps: [s.p1, s.p2] })
			.collect();
		PrModel { points, springs }
	}
}
