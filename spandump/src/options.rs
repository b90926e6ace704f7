use std::borrow::Cow;

/// Layout options of a [`Dumper`](crate::Dumper).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Indentation added per nesting level.
    pub indent_unit: Cow<'static, str>,
    /// Line terminator written between members.
    pub line_end: Cow<'static, str>,
}

impl Default for DumpOptions {
    #[inline]
    fn default() -> Self {
        DumpOptions {
            indent_unit: Cow::Borrowed("\t"),
            line_end: Cow::Borrowed("\n"),
        }
    }
}

impl DumpOptions {
    #[inline]
    pub fn with_indent_unit(mut self, indent_unit: impl Into<Cow<'static, str>>) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }

    #[inline]
    pub fn with_line_end(mut self, line_end: impl Into<Cow<'static, str>>) -> Self {
        self.line_end = line_end.into();
        self
    }

    /// Returns indentation of given nesting depth.
    #[inline]
    pub fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }
}
