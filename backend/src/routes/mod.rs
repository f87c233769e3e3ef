pub mod catalog;
pub mod density;
pub mod orbits;
pub mod similarity;
pub mod synthetic;
pub mod view;
