pub mod inspect;
pub mod interactive;
pub mod preset;
