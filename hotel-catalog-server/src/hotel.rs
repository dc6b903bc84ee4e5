pub mod detail;
pub mod import;
pub mod model;
