use crate::body::Body;
use crate::params::SimParams;
use crate::V2;

const GY: f32 = -9.8;
const DIR_F: f32 = 25.0;
const PTR_L0: f32 = 2.5;
const PTR_KS: f32 = 22.0;
const PTR_KD: f32 = 54.0;
const VOL_EPS: f32 = 1e-10;

/// Overwrite the per-point force buffer from the current state.
/// Spring normals are refreshed as a side effect; they are scratch for
/// the pressure pass, valid until the next call.
pub fn accumulate(body: &mut Body, params: &SimParams, pressure: f32) {
	base_forces(body, params, pressure);
	pointer_force(body, params);
	spring_forces(body, params);
	if body.closed {
		let vol = volume(body);
		if vol > VOL_EPS {
			pressure_forces(body, pressure, vol);
		}
	}
}

fn base_forces(body: &mut Body, params: &SimParams, pressure: f32) {
	let mut f = V2::new(0., 0.);
	if params.dir.left {
		f[0] -= DIR_F;
	}
	if params.dir.right {
		f[0] += DIR_F;
	}
	if params.dir.up {
		f[1] += DIR_F;
	}
	if params.dir.down {
		f[1] -= DIR_F;
	}
	// inflation assist, dropped once the target pressure is reached
	// and whenever a vertical flag overrides it
	if !params.dir.up && !params.dir.down && pressure < params.pressure {
		f[1] += GY;
	}
	f *= params.mass;
	for force in body.points.force.iter_mut() {
		*force = f;
	}
}

fn pointer_force(body: &mut Body, params: &SimParams) {
	let anchor = match params.pointer {
		Some(p) => V2::new(p[0], p[1]),
		None => return,
	};
	let dp = body.points.pos[0] - anchor;
	let d = dp.magnitude();
	if !d.is_finite() || d == 0. {
		// collapsed or non-finite offset, nothing to act along
		return;
	}
	let f = (d - PTR_L0) * PTR_KS + body.points.vel[0].dot(&dp) * PTR_KD / d;
	body.points.force[0] -= dp / d * f;
}

fn spring_forces(body: &mut Body, params: &SimParams) {
	let points = &mut body.points;
	for s in body.springs.iter_mut() {
		let dp = points.pos[s.p1] - points.pos[s.p2];
		let d = dp.magnitude();
		if d == 0. {
			// coincident endpoints, no axis to act along
			s.n = V2::new(0., 0.);
			continue;
		}
		let dv = points.vel[s.p1] - points.vel[s.p2];
		let f = (d - s.l0) * params.ks + dv.dot(&dp) * params.kd / d;
		let fv = dp / d * f;
		points.force[s.p1] -= fv;
		points.force[s.p2] += fv;
		s.n = V2::new(-dp[1], dp[0]) / d;
	}
}

// Gauss theorem estimate of the enclosed area, x projection only.
// Coarse on purpose: the pressure law below is tuned against it.
fn volume(body: &Body) -> f32 {
	let mut vol = 0f32;
	for s in body.springs.iter() {
		let dp = body.points.pos[s.p1] - body.points.pos[s.p2];
		vol += 0.5 * dp[0].abs() * s.n[0].abs() * dp.magnitude();
	}
	vol
}

fn pressure_forces(body: &mut Body, pressure: f32, vol: f32) {
	let points = &mut body.points;
	for s in body.springs.iter() {
		let d = (points.pos[s.p1] - points.pos[s.p2]).magnitude();
		let pv = d * pressure / vol;
		// same vector on both ends, the loop inflates outward
		points.force[s.p1] += s.n * pv;
		points.force[s.p2] += s.n * pv;
	}
}
