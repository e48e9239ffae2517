pub mod bakery;
pub mod settings;
pub mod timer;
