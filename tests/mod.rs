pub mod scaffold;
pub mod setup;
