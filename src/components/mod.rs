pub mod datatrafik;
pub mod edges;
pub mod ui;
