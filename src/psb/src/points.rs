use crate::V2;

/// Structure-of-arrays point storage. The three arrays hold one entry
/// per point and only grow together, at body construction.
#[derive(Clone, Default)]
pub struct PointSet {
	pub(crate) pos: Vec<V2>,
	pub(crate) vel: Vec<V2>,
	pub(crate) force: Vec<V2>,
}

impl PointSet {
	pub(crate) fn push(&mut self, pos: V2) {
		self.pos.push(pos);
		self.vel.push(V2::new(0., 0.));
		self.force.push(V2::new(0., 0.));
	}

	pub fn len(&self) -> usize {
		self.pos.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pos.is_empty()
	}

	pub fn get_pos(&self, i: usize) -> V2 {
		self.pos[i]
	}

	pub fn get_vel(&self, i: usize) -> V2 {
		self.vel[i]
	}

	pub fn get_force(&self, i: usize) -> V2 {
		self.force[i]
	}

	pub fn positions(&self) -> Vec<V2> {
		self.pos.clone()
	}
}
