mod case;
mod resultmatcher;

pub use case::Case;
pub use case::Invocation;
pub(crate) use case::generate_testcases;
pub use resultmatcher::ResultMatcher;
