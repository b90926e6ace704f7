use crate::dump::{dump_array, write_values};
use crate::error::{Error, Result};
use crate::options::DumpOptions;
use bytemuck::Pod;
use smallvec::{smallvec, SmallVec};
use spandump_common::{quoted, DumpValue, Span};
use std::io::Write;
use std::mem::size_of;

/// Dumper composes named dumps into an indented, object-like text.
///
/// Members of the same level are separated by a comma and a line end,
/// each member starts with the indentation of its level:
///
/// ```text
/// "mesh": {
///     "position": [1,2,3,  4,5,6],
///     "ids": [7, 8, 9]
/// }
/// ```
///
/// The writer is exclusively borrowed or owned by the dumper, so output
/// of one dumper is never interleaved with other writes.
pub struct Dumper<W: Write> {
    writer: W,
    options: DumpOptions,
    // one flag per open level, set once the level has a member.
    levels: SmallVec<[bool; 8]>,
}

impl<W: Write> Dumper<W> {
    #[inline]
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, DumpOptions::default())
    }

    #[inline]
    pub fn with_options(writer: W, options: DumpOptions) -> Self {
        Dumper {
            writer,
            options,
            levels: smallvec![false],
        }
    }

    #[inline]
    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    /// Returns count of open objects.
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Dump a span as member of current level, see [`dump_span`](crate::dump_span).
    ///
    /// # Panics
    ///
    /// Panics before anything is written if the size of `S` is not a
    /// multiple of the size of `T`.
    pub fn span<T, S>(&mut self, name: &str, span: Span<'_, S>) -> Result<&mut Self>
    where
        T: DumpValue,
        S: Pod,
    {
        let values = match span.read_values::<T>() {
            Ok(values) => values,
            Err(e) => panic!("cannot dump span {}: {}", quoted(name), e),
        };
        self.member_values(name, &*values, size_of::<S>() / size_of::<T>())
    }

    /// Dump a span as member of current level. Returns error and writes
    /// nothing if the size of `S` is not a multiple of the size of `T`.
    pub fn try_span<T, S>(&mut self, name: &str, span: Span<'_, S>) -> Result<&mut Self>
    where
        T: DumpValue,
        S: Pod,
    {
        let values = span.read_values::<T>()?;
        self.member_values(name, &*values, size_of::<S>() / size_of::<T>())
    }

    /// Dump a list of strings as member of current level, see [`dump_array`].
    pub fn array<I>(&mut self, name: &str, items: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.begin_member()?;
        let indent = self.options.indent(self.depth());
        dump_array(&mut self.writer, name, items, &indent)?;
        Ok(self)
    }

    /// Open a nested object, optionally named.
    pub fn begin_object(&mut self, name: Option<&str>) -> Result<&mut Self> {
        self.begin_member()?;
        let indent = self.options.indent(self.depth());
        match name {
            Some(name) => write!(self.writer, "{}{}: {{", indent, quoted(name))?,
            None => write!(self.writer, "{}{{", indent)?,
        }
        self.writer.write_all(self.options.line_end.as_bytes())?;
        self.levels.push(false);
        log::trace!("begin object at depth {}", self.depth());
        Ok(self)
    }

    /// Close the innermost open object.
    pub fn end_object(&mut self) -> Result<&mut Self> {
        if self.depth() == 0 {
            return Err(Error::InvalidState("no object to end".to_string()));
        }
        let has_member = self.levels.pop().unwrap_or_default();
        if has_member {
            self.writer.write_all(self.options.line_end.as_bytes())?;
        }
        let indent = self.options.indent(self.depth());
        write!(self.writer, "{}}}", indent)?;
        log::trace!("end object at depth {}", self.depth() + 1);
        Ok(self)
    }

    /// Terminate the last line, flush and return the writer.
    /// All objects must be closed.
    pub fn finish(mut self) -> Result<W> {
        if self.depth() != 0 {
            return Err(Error::InvalidState(format!(
                "{} object(s) not ended",
                self.depth()
            )));
        }
        if self.levels[0] {
            self.writer.write_all(self.options.line_end.as_bytes())?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn member_values<T: DumpValue>(
        &mut self,
        name: &str,
        values: &[T],
        group_size: usize,
    ) -> Result<&mut Self> {
        self.begin_member()?;
        let indent = self.options.indent(self.depth());
        write_values(&mut self.writer, name, Span::new(values), group_size, &indent)?;
        Ok(self)
    }

    fn begin_member(&mut self) -> Result<()> {
        let Dumper {
            writer,
            options,
            levels,
        } = self;
        match levels.last_mut() {
            Some(has_member) if *has_member => {
                writer.write_all(b",")?;
                writer.write_all(options.line_end.as_bytes())?;
            }
            Some(has_member) => *has_member = true,
            None => return Err(Error::InvalidState("dumper has no level".to_string())),
        }
        Ok(())
    }
}
