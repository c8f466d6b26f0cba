pub mod nodejs;
pub mod rust;
