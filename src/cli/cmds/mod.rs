pub mod add;
pub mod count;
pub mod demo;
pub mod equals;
pub mod has;
pub mod rm;
pub mod root;
pub mod show;
pub mod stats;
pub mod union;
