pub mod analysis;
pub mod suggestion;
