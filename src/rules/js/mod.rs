pub mod react;
pub mod typescript;
