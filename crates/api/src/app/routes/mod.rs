pub mod evaluate;
pub mod system;
