pub mod docker;
pub mod selenium;
