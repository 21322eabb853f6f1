use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, SystemTime};

use protocol::pr_model::PrModel;
use protocol::user_event::{UpdateInfo, UserEvent};

use crate::body::Body;
use crate::controller_message::ControllerMessage;
use crate::error::ConfigError;
use crate::heun::Heun;
use crate::params::SimParams;
use crate::posbox::Posbox;
use crate::V2;

/// How the live pressure follows the target between ticks. `Snap` is
/// the reference behavior; `Ramp` inflates gradually by a fixed
/// increment per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressureMode {
	Snap,
	Ramp(f32),
}

pub struct World {
	pub dt: f32,
	pub spt: usize,
	pub time_scale: f32,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,

	body: Body,
	posbox: Posbox,
	params: SimParams,
	pressure: f32,
	pressure_mode: PressureMode,
	heun: Heun,
}

impl Default for World {
	fn default() -> Self {
		Self {
			dt: 0.005,
			spt: 2,
			time_scale: 1.0,
			forward_frames: -1,

			body: Body::default(),
			posbox: Posbox::default(),
			params: SimParams::default(),
			pressure: 0.,
			pressure_mode: PressureMode::Snap,
			heun: Heun::default(),
		}
	}
}

impl World {
	pub fn new(body: Body, posbox: Posbox, params: SimParams) -> Result<Self, ConfigError> {
		posbox.validate()?;
		params.validate()?;
		Ok(Self {
			body,
			posbox,
			params,
			..Self::default()
		})
	}

	pub fn with_dt(mut self, dt: f32) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_spt(mut self, spt: usize) -> Self {
		self.spt = spt;
		self
	}

	pub fn with_time_scale(mut self, time_scale: f32) -> Self {
		self.time_scale = time_scale;
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	pub fn with_slow_down(mut self, k: f32) -> Self {
		self.dt /= k;
		self.time_scale *= k;
		self
	}

	pub fn with_pressure_ramp(mut self, step: f32) -> Self {
		self.pressure_mode = PressureMode::Ramp(step);
		self
	}

	pub fn init_test(&mut self) {
		self.body = Body::new_ring(30, 0.516, 0.516, V2::new(400., 250.)).unwrap();
		self.posbox = Posbox::default();
		self.params = SimParams::default();
		self.pressure = 0.;
	}

	pub fn set_params(&mut self, params: SimParams) -> Result<(), ConfigError> {
		params.validate()?;
		self.params = params;
		Ok(())
	}

	pub fn params(&self) -> &SimParams {
		&self.params
	}

	pub fn pressure(&self) -> f32 {
		self.pressure
	}

	pub fn body(&self) -> &Body {
		&self.body
	}

	pub fn positions(&self) -> Vec<V2> {
		self.body.positions()
	}

	pub fn pr_model(&self) -> PrModel {
		self.body.pr_model()
	}

	fn update_pressure(&mut self) {
		let target = self.params.pressure;
		match self.pressure_mode {
			PressureMode::Snap => self.pressure = target,
			PressureMode::Ramp(step) => {
				if self.pressure < target {
					self.pressure = (self.pressure + step).min(target);
				} else if self.pressure > target {
					self.pressure = (self.pressure - step).max(target);
				}
			}
		}
	}

	/// One frame: `spt` integration steps, then the pressure update.
	pub fn tick(&mut self) {
		for _ in 0..self.spt {
			self.heun.step(
				&mut self.body,
				&self.params,
				self.pressure,
				&self.posbox,
				self.dt,
			);
		}
		self.update_pressure();
	}

	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControllerMessage>,
	) {
		let mut start_time = SystemTime::now();
		let rtime: u64 =
			(self.dt * 1e6 * self.spt as f32 * self.time_scale) as u64;
		let mut first_frame = true;
		loop {
			if self.forward_frames != 0 {
				self.forward_frames -= 1;
				if !first_frame {
					self.tick();
				} else {
					first_frame = false;
				}
				let spent = SystemTime::now()
					.duration_since(start_time)
					.unwrap()
					.as_micros() as u64;
				let info = UpdateInfo {
					load: spent as f32 / rtime as f32,
					point_len: self.body.points().len(),
					spring_len: self.body.springs().len(),
				};
				if tx.send(UserEvent::Update(self.body.pr_model(), info)).is_err() {
					// frontend gone, stop simulating
					return;
				}
			}

			while let Ok(msg) = rx.try_recv() {
				match msg {
					ControllerMessage::TogglePause => {
						if self.forward_frames == 0 {
							self.forward_frames = -1;
						} else {
							self.forward_frames = 0;
						}
					}
					ControllerMessage::FrameForward => {
						if self.forward_frames == 0 {
							self.forward_frames += 1;
						}
					}
					ControllerMessage::SetParams(params) => {
						if let Err(e) = self.set_params(params) {
							eprintln!("WARN: params rejected: {}", e);
						}
					}
					ControllerMessage::GrabPoint(pos)
					| ControllerMessage::MovePoint(pos) => {
						if pos[0].is_finite() && pos[1].is_finite() {
							self.params.pointer = Some(pos);
						} else {
							eprintln!("WARN: pointer rejected: {:?}", pos);
						}
					}
					ControllerMessage::ReleasePoint => {
						self.params.pointer = None;
					}
				}
			}

			let spent = SystemTime::now()
				.duration_since(start_time)
				.unwrap()
				.as_micros() as u64;
			if spent < rtime {
				std::thread::sleep(Duration::from_micros(rtime - spent));
			}
			start_time = SystemTime::now();
		}
	}
}

#[cfg(test)]
mod test {
	use std::sync::mpsc::channel;

	use super::*;

	#[test]
	fn test_pressure_snaps_after_tick() {
		let mut world = World::default();
		world.init_test();
		assert_eq!(world.pressure(), 0.);
		world.tick();
		assert_eq!(world.pressure(), world.params().pressure);
	}

	#[test]
	fn test_pressure_ramp_no_overshoot() {
		let mut world = World::default().with_pressure_ramp(30000.);
		world.init_test();
		let target = world.params().pressure;
		let mut last = world.pressure();
		for _ in 0..5 {
			world.tick();
			let p = world.pressure();
			assert!(p >= last);
			assert!(p <= target);
			last = p;
		}
		assert_eq!(last, target);
	}

	#[test]
	fn test_zero_pressure_ring_is_static() {
		// target 0 disables gravity, springs start at rest: nothing moves
		let mut world = World::default();
		world.init_test();
		let mut params = SimParams::default();
		params.pressure = 0.;
		world.set_params(params).unwrap();
		let before = world.positions();
		for _ in 0..10 {
			world.tick();
		}
		assert_eq!(world.positions(), before);
	}

	#[test]
	fn test_reference_scene_stays_bounded() {
		let mut world = World::default();
		world.init_test();
		let c0 = world.body().centroid();
		for _ in 0..100 {
			world.tick();
			for p in world.positions() {
				assert!(p[0] >= 0. && p[0] <= 800.);
				assert!(p[1] >= 0. && p[1] <= 500.);
			}
		}
		assert_eq!(world.body().points().len(), 30);
		assert_eq!(world.body().springs().len(), 30);
		let drift = (world.body().centroid() - c0).magnitude();
		assert!(drift < 1.0, "centroid drifted {}", drift);
	}

	#[test]
	fn test_inflated_ring_settles() {
		let mut world = World::default();
		world.init_test();
		for _ in 0..2000 {
			world.tick();
		}
		let mut max_dp = 0f32;
		for _ in 0..10 {
			let before = world.positions();
			world.tick();
			for (a, b) in world.positions().iter().zip(before.iter()) {
				let dp = (a - b).magnitude();
				if dp > max_dp {
					max_dp = dp;
				}
			}
		}
		assert!(max_dp < 5e-3, "still moving by {} per tick", max_dp);
	}

	#[test]
	fn test_bad_config_rejected() {
		let body = Body::new_ring(4, 1., 1., V2::new(5., 5.)).unwrap();
		let bx = Posbox {
			xmin: 10.,
			xmax: 0.,
			ymin: 0.,
			ymax: 10.,
		};
		assert!(World::new(body.clone(), bx, SimParams::default()).is_err());
		let mut params = SimParams::default();
		params.mass = -1.;
		assert!(World::new(body.clone(), Posbox::default(), params).is_err());
		let mut params = SimParams::default();
		params.pointer = Some([f32::NAN, 250.]);
		assert!(World::new(body, Posbox::default(), params).is_err());
	}

	#[test]
	fn test_builder_setters() {
		let world = World::default().with_dt(0.01).with_spt(4).with_time_scale(2.);
		assert_eq!(world.dt, 0.01);
		assert_eq!(world.spt, 4);
		assert_eq!(world.time_scale, 2.);
		let world = World::default().with_slow_down(2.);
		assert_eq!(world.dt, 0.0025);
		assert_eq!(world.time_scale, 2.);
	}

	fn spawn_world(paused: bool) -> (Receiver<UserEvent>, Sender<ControllerMessage>) {
		let (tx, rx) = channel();
		let (tx2, rx2) = channel();
		std::thread::spawn(move || {
			let mut world = World::default().with_time_scale(0.05);
			if paused {
				world = world.with_paused();
			}
			world.init_test();
			world.run_thread(tx, rx2);
		});
		(rx, tx2)
	}

	fn recv_point0_x(rx: &Receiver<UserEvent>) -> f32 {
		let UserEvent::Update(model, _) = rx.recv().unwrap();
		model.points[0].pos[0]
	}

	#[test]
	fn test_run_thread_grab_pulls_point() {
		let (rx, tx2) = spawn_world(false);
		let mut before = 0f32;
		for _ in 0..300 {
			before = recv_point0_x(&rx);
		}
		// anchor far right of the settled ring, point 0 has to chase it
		tx2.send(ControllerMessage::GrabPoint([790., 250.])).unwrap();
		let mut after = before;
		for _ in 0..600 {
			after = recv_point0_x(&rx);
		}
		assert!(after > before + 200., "point 0 only reached {}", after);
	}

	#[test]
	fn test_run_thread_release_clears_grab() {
		let (rx, tx2) = spawn_world(false);
		let mut before = 0f32;
		for _ in 0..300 {
			before = recv_point0_x(&rx);
		}
		// paused around the pair, grab and release land with no step between
		tx2.send(ControllerMessage::TogglePause).unwrap();
		tx2.send(ControllerMessage::GrabPoint([790., 250.])).unwrap();
		tx2.send(ControllerMessage::ReleasePoint).unwrap();
		tx2.send(ControllerMessage::TogglePause).unwrap();
		let mut after = before;
		for _ in 0..400 {
			after = recv_point0_x(&rx);
		}
		assert!((after - before).abs() < 100., "point 0 drifted to {}", after);
	}

	#[test]
	fn test_run_thread_rejects_bad_control() {
		let (rx, tx2) = spawn_world(false);
		let mut before = 0f32;
		for _ in 0..300 {
			before = recv_point0_x(&rx);
		}
		let mut bad = SimParams::default();
		bad.mass = -1.;
		tx2.send(ControllerMessage::SetParams(bad)).unwrap();
		tx2.send(ControllerMessage::GrabPoint([f32::NAN, 250.])).unwrap();
		let mut after = before;
		for _ in 0..300 {
			after = recv_point0_x(&rx);
			assert!(after.is_finite());
		}
		assert!((after - before).abs() < 100., "point 0 drifted to {}", after);
	}

	#[test]
	fn test_run_thread_paused_start() {
		let (rx, tx2) = spawn_world(true);
		// paused world still provides the untouched first frame
		let UserEvent::Update(model, info) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
		assert_eq!(info.point_len, 30);
		assert_eq!(info.spring_len, 30);
		let x0 = model.points[0].pos[0];
		assert!((x0 - 400.516).abs() < 1e-3);
		assert_eq!(model.points[0].pos[1], 250.);
		// one frame forward: a single tick, the inflation assist drops y only
		tx2.send(ControllerMessage::FrameForward).unwrap();
		let UserEvent::Update(model, _) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
		assert_eq!(model.points[0].pos[0], x0);
		assert!(model.points[0].pos[1] < 250.);
		tx2.send(ControllerMessage::TogglePause).unwrap();
		let UserEvent::Update(model, _) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
		assert!(model.points[0].pos[1].is_finite());
	}
}
