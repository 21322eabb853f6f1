use crate::V2;

/// Linear spring between two points, identified by index into the
/// body's point set. `n` is the outward edge normal refreshed by the
/// force pass each step, consumed by the pressure pass.
#[derive(Clone, Debug)]
pub struct Spring {
	pub p1: usize,
	pub p2: usize,
	pub l0: f32,
	pub(crate) n: V2,
}

impl Spring {
	pub fn new(p1: usize, p2: usize, l0: f32) -> Self {
		Self {
			p1,
			p2,
			l0,
			n: V2::new(0., 0.),
		}
	}

	pub fn normal(&self) -> V2 {
		self.n
	}
}
