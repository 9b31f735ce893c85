mod bag;
mod printer;
mod style;

pub use bag::Bag;
pub use bag::IntoIter;
pub use bag::ItemNotFound;
pub use bag::Iter;
pub use bag::LenOverflow;
pub use printer::Printer;
pub use style::Style;
