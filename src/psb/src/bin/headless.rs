use std::sync::mpsc::channel;

use protocol::user_event::UserEvent;
use psb::controller_message::ControllerMessage;
use psb::params::SimParams;
use psb::world::World;

fn main() {
	let (tx, rx) = channel();
	let (tx2, rx2) = channel();
	let _ = std::thread::spawn(move || {
		let mut world = World::default();
		world.init_test();
		world.run_thread(tx, rx2);
	});
	for frame in 0..100 {
		let UserEvent::Update(model, info) = rx.recv().unwrap();
		if frame % 10 == 0 {
			let p = model.points[0].pos;
			eprintln!(
				"INFO: frame {}: point 0 at [{:.1}, {:.1}], load {:.2}%",
				frame,
				p[0],
				p[1],
				info.load * 100.,
			);
		}
		if frame == 50 {
			let params = SimParams {
				pressure: 35000.,
				..Default::default()
			};
			tx2.send(ControllerMessage::SetParams(params)).unwrap();
		}
	}
}
