// pr_model: body snapshot for rendering, ordered by point index

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrPoint {
	pub pos: [f32; 2],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrSpring {
	pub ps: [usize; 2],
}

/// Point `i` is the first endpoint of spring `i` for ring bodies, so a
/// renderer can walk either list and stay in topology order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrModel {
	pub points: Vec<PrPoint>,
	pub springs: Vec<PrSpring>,
}
