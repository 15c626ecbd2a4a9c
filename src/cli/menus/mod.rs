pub mod filters;
pub mod report;
pub mod root;
pub mod tags;
pub mod tracking;
