/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq, derive_more::From)]
pub enum Output {
    String(String),
}

impl std::fmt::Display for Output {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::String(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
        }
    }
}
