use crate::error::Result;
use bytemuck::Pod;
use spandump_common::{quoted, DumpValue, Span};
use std::any::type_name;
use std::io::{self, Write};
use std::mem::size_of;

const VALUE_SEP: &[u8] = b", ";
const GROUP_INNER_SEP: &[u8] = b",";
const GROUP_SEP: &[u8] = b",  ";

/// Dump a named span as `<indent>"<name>": [...]`, with its bytes
/// reinterpreted as values of type `T`.
///
/// If one element of `S` holds several `T` values, values of the same
/// element are joined by `","` and elements are joined by `",  "`.
/// Otherwise values are joined by `", "`. No line end is written.
///
/// # Panics
///
/// Panics before anything is written if the size of `S` is not a multiple
/// of the size of `T`. A span not aligned for `T` is read value by value.
/// Use [`try_dump_span`] if the types are only known at runtime.
pub fn dump_span<T, S, W>(
    writer: &mut W,
    name: &str,
    span: Span<'_, S>,
    indent: &str,
) -> Result<()>
where
    T: DumpValue,
    S: Pod,
    W: Write + ?Sized,
{
    let values = match span.read_values::<T>() {
        Ok(values) => values,
        Err(e) => panic!(
            "cannot dump span {} of {} as {}: {}",
            quoted(name),
            type_name::<S>(),
            type_name::<T>(),
            e
        ),
    };
    write_values(
        writer,
        name,
        Span::new(&*values),
        size_of::<S>() / size_of::<T>(),
        indent,
    )?;
    Ok(())
}

/// Same as [`dump_span`], but returns an error instead of panicking
/// when the element sizes do not match. Nothing is written in that case.
pub fn try_dump_span<T, S, W>(
    writer: &mut W,
    name: &str,
    span: Span<'_, S>,
    indent: &str,
) -> Result<()>
where
    T: DumpValue,
    S: Pod,
    W: Write + ?Sized,
{
    let values = span.read_values::<T>().map_err(|e| {
        log::debug!("span {} is not dumpable as {}: {}", name, type_name::<T>(), e);
        e
    })?;
    write_values(
        writer,
        name,
        Span::new(&*values),
        size_of::<S>() / size_of::<T>(),
        indent,
    )?;
    Ok(())
}

/// Dump a named list of strings as `<indent>"<name>": ["a", "b"]`.
/// Every item is quoted, items are joined by `", "`.
pub fn dump_array<W, I>(writer: &mut W, name: &str, items: I, indent: &str) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    write!(writer, "{}{}: [", indent, quoted(name))?;
    let mut n = 0usize;
    for item in items {
        if n > 0 {
            writer.write_all(VALUE_SEP)?;
        }
        write!(writer, "{}", quoted(item.as_ref()))?;
        n += 1;
    }
    writer.write_all(b"]")?;
    log::trace!("dumped array {} with {} items", name, n);
    Ok(())
}

/// Dump a span to stdout, see [`dump_span`].
///
/// Stdout stays locked for the whole dump, so concurrent dumps never
/// interleave within one line.
#[inline]
pub fn print_span<T, S>(name: &str, span: Span<'_, S>, indent: &str) -> Result<()>
where
    T: DumpValue,
    S: Pod,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump_span::<T, S, _>(&mut out, name, span, indent)
}

/// Dump a list of strings to stdout, see [`dump_array`].
#[inline]
pub fn print_array<I>(name: &str, items: I, indent: &str) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump_array(&mut out, name, items, indent)
}

pub(crate) fn write_values<T, W>(
    writer: &mut W,
    name: &str,
    values: Span<'_, T>,
    group_size: usize,
    indent: &str,
) -> io::Result<()>
where
    T: DumpValue,
    W: Write + ?Sized,
{
    write!(writer, "{}{}: [", indent, quoted(name))?;
    if group_size == 1 {
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                writer.write_all(VALUE_SEP)?;
            }
            v.write_value(writer)?;
        }
    } else {
        for (i, group) in values.groups(group_size).enumerate() {
            if i > 0 {
                writer.write_all(GROUP_SEP)?;
            }
            for (j, v) in group.iter().enumerate() {
                if j > 0 {
                    writer.write_all(GROUP_INNER_SEP)?;
                }
                v.write_value(writer)?;
            }
        }
    }
    writer.write_all(b"]")?;
    log::trace!(
        "dumped span {} with {} values in groups of {}",
        name,
        values.len(),
        group_size
    );
    Ok(())
}
