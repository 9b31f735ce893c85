mod base;
mod cli;

pub use base::Bag;
pub use base::IntoIter;
pub use base::ItemNotFound;
pub use base::Iter;
pub use base::LenOverflow;
pub use base::Printer;
pub use base::Style;
pub use cli::Output;
pub use cli::Root;
