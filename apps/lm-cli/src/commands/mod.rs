pub mod countries;
pub mod estimate;
pub mod shell;
