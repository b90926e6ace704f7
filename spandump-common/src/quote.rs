use std::fmt;

/// Display adapter that wraps a string in double quotes.
/// Embedded quotes and backslashes are escaped with a backslash.
#[derive(Debug, Clone, Copy)]
pub struct Quoted<'a>(&'a str);

#[inline]
pub fn quoted(s: &str) -> Quoted<'_> {
    Quoted(s)
}

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        let mut rest = self.0;
        while let Some(idx) = rest.find(['"', '\\']) {
            f.write_str(&rest[..idx])?;
            f.write_str("\\")?;
            f.write_str(&rest[idx..idx + 1])?;
            rest = &rest[idx + 1..];
        }
        f.write_str(rest)?;
        f.write_str("\"")
    }
}
