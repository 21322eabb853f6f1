use crate::pr_model::PrModel;

#[derive(Debug)]
pub enum UserEvent {
	Update(PrModel, UpdateInfo),
}

/// Per-frame stats sent alongside the model; `load` is the fraction of the
/// frame interval the last tick actually spent.
#[derive(Debug)]
pub struct UpdateInfo {
	pub load: f32,
	pub point_len: usize,
	pub spring_len: usize,
}
