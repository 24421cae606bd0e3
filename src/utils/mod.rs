pub mod cell;
pub mod date;
pub mod duration;
