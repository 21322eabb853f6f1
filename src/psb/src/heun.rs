use crate::body::Body;
use crate::forces;
use crate::params::SimParams;
use crate::posbox::Posbox;
use crate::V2;

const RESTITUTION: f32 = 0.1;

/// Heun predictor-corrector advance with boundary clamping. Owns the
/// force/velocity scratch saved between the two stages.
#[derive(Default)]
pub struct Heun {
	fsaved: Vec<V2>,
	vsaved: Vec<V2>,
}

fn collide_axis(pos: &mut f32, vel: &mut f32, min: f32, max: f32, dt: f32) {
	let delta = *vel * dt;
	if *pos + delta < min {
		*pos = min;
		*vel *= -RESTITUTION;
	} else if *pos + delta > max {
		*pos = max;
		*vel *= -RESTITUTION;
	} else {
		*pos += delta;
	}
}

#[cfg(not(debug_assertions))]
fn predict(body: &mut Body, mass: f32, dt: f32) {
	use rayon::prelude::*;
	let points = &mut body.points;
	points
		.pos
		.par_iter_mut()
		.zip(points.vel.par_iter_mut())
		.zip(points.force.par_iter())
		.for_each(|((pos, vel), force)| {
			*vel += *force / mass * dt;
			*pos += *vel * dt;
		});
}

#[cfg(debug_assertions)]
fn predict(body: &mut Body, mass: f32, dt: f32) {
	let points = &mut body.points;
	points
		.pos
		.iter_mut()
		.zip(points.vel.iter_mut())
		.zip(points.force.iter())
		.for_each(|((pos, vel), force)| {
			*vel += *force / mass * dt;
			*pos += *vel * dt;
		});
}

impl Heun {
	/// One fixed step: evaluate forces, predict in place, re-evaluate,
	/// correct with the trapezoidal force average, clamp to the box.
	pub fn step(
		&mut self,
		body: &mut Body,
		params: &SimParams,
		pressure: f32,
		bx: &Posbox,
		dt: f32,
	) {
		forces::accumulate(body, params, pressure);
		self.save(body);
		predict(body, params.mass, dt);
		forces::accumulate(body, params, pressure);
		self.correct(body, params.mass, bx, dt);
		for (i, pos) in body.points.pos.iter().enumerate() {
			if !bx.contains(*pos) {
				eprintln!("WARN: point {} out of box: {:?}", i, pos);
			}
		}
	}

	fn save(&mut self, body: &Body) {
		self.fsaved.clear();
		self.fsaved.extend_from_slice(&body.points.force);
		self.vsaved.clear();
		self.vsaved.extend_from_slice(&body.points.vel);
	}

	#[cfg(not(debug_assertions))]
	fn correct(&mut self, body: &mut Body, mass: f32, bx: &Posbox, dt: f32) {
		use rayon::prelude::*;
		let points = &mut body.points;
		points
			.pos
			.par_iter_mut()
			.zip(points.vel.par_iter_mut())
			.zip(points.force.par_iter())
			.zip(self.fsaved.par_iter())
			.zip(self.vsaved.par_iter())
			.for_each(|((((pos, vel), force), fsaved), vsaved)| {
				*vel = *vsaved + (*force + *fsaved) / mass * dt / 2.;
				collide_axis(&mut pos[0], &mut vel[0], bx.xmin, bx.xmax, dt);
				collide_axis(&mut pos[1], &mut vel[1], bx.ymin, bx.ymax, dt);
			});
	}

	#[cfg(debug_assertions)]
	fn correct(&mut self, body: &mut Body, mass: f32, bx: &Posbox, dt: f32) {
		let points = &mut body.points;
		points
			.pos
			.iter_mut()
			.zip(points.vel.iter_mut())
			.zip(points.force.iter())
			.zip(self.fsaved.iter())
			.zip(self.vsaved.iter())
			.for_each(|((((pos, vel), force), fsaved), vsaved)| {
				*vel = *vsaved + (*force + *fsaved) / mass * dt / 2.;
				collide_axis(&mut pos[0], &mut vel[0], bx.xmin, bx.xmax, dt);
				collide_axis(&mut pos[1], &mut vel[1], bx.ymin, bx.ymax, dt);
			});
	}
}
