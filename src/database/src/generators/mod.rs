pub mod player;
pub mod team;

pub use player::PlayerGenerator;
pub use team::TeamGenerator;
