pub mod body;
pub mod controller_message;
pub mod error;
pub mod forces;
pub mod heun;
pub mod params;
pub mod points;
pub mod posbox;
pub mod spring;
pub mod world;

pub type V2 = nalgebra::Vector2<f32>;
