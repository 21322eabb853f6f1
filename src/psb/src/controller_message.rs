use crate::params::SimParams;

pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	SetParams(SimParams),
	GrabPoint([f32; 2]),
	MovePoint([f32; 2]),
	ReleasePoint,
}
