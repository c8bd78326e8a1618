/// A single import declaration as written in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    /// The import path literal exactly as written, quotes included
    pub request: String,
    /// 1-based line of the import path literal
    pub line: usize,
}
