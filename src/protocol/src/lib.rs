pub mod pr_model;
pub mod user_event;

use pr_model::PrModel;

use serde::{Deserialize, Serialize};

/// Wire format for out-of-process frontends.
#[derive(Serialize, Deserialize)]
pub enum Message {
	WorldUpdate(PrModel),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> Vec<u8> {
		bincode::serialize(&self).unwrap()
	}

	pub fn from_bytes(bytes: &[u8]) -> Self {
		bincode::deserialize(bytes).unwrap()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::pr_model::{PrPoint, PrSpring};

	#[test]
	fn test_message_bytes() {
		let model = PrModel {
			points: vec![PrPoint { pos: [1.5, -2.0] }],
			springs: vec![PrSpring { ps: [0, 0] }],
		};
		let bytes = Message::WorldUpdate(model).to_bytes();
		match Message::from_bytes(&bytes) {
			Message::WorldUpdate(m) => {
				assert_eq!(m.points.len(), 1);
				assert_eq!(m.points[0].pos, [1.5, -2.0]);
				assert_eq!(m.springs[0].ps, [0, 0]);
			}
			Message::Nop => panic!("wrong variant"),
		}
	}
}
