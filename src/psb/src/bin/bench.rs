use std::time::SystemTime;

use psb::world::World;

fn main() {
	let start = SystemTime::now();
	let mut world = World::default();
	world.init_test();
	let rframes = 1000;
	for _ in 0..rframes {
		world.tick();
	}
	let time = rframes as f32 * world.dt * world.spt as f32;
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
