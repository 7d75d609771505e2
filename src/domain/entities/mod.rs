pub mod edit;
pub mod grid;
pub mod sheet;
pub mod upload;
