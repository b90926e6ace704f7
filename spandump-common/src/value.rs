use bytemuck::Pod;
use std::io;

/// Textual rendering of a single element in a dump.
pub trait DumpValue: Pod {
    fn write_value<W: io::Write + ?Sized>(&self, writer: &mut W) -> io::Result<()>;
}

macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl DumpValue for $ty {
                #[inline]
                fn write_value<W>(&self, writer: &mut W) -> io::Result<()>
                where
                    W: io::Write + ?Sized,
                {
                    write!(writer, "{}", self)
                }
            }
        )*
    };
}

impl_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Significant digits of a float, same as the default of a C++ output stream.
const FLOAT_PRECISION: i32 = 6;

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl DumpValue for $ty {
                /// `%g` style with 6 significant digits: `1.0` is written as `1`,
                /// `1234567.0` as `1.23457e+06`.
                #[inline]
                fn write_value<W>(&self, writer: &mut W) -> io::Result<()>
                where
                    W: io::Write + ?Sized,
                {
                    write_general(writer, f64::from(*self))
                }
            }
        )*
    };
}

impl_float!(f32, f64);

fn write_general<W>(writer: &mut W, v: f64) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    if v.is_nan() {
        return writer.write_all(b"nan");
    }
    if v.is_infinite() {
        let s: &[u8] = if v.is_sign_negative() { b"-inf" } else { b"inf" };
        return writer.write_all(s);
    }
    // exponent after rounding to the target precision
    let sci = format!("{:.*e}", (FLOAT_PRECISION - 1) as usize, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= FLOAT_PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(
            writer,
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exp.unsigned_abs()
        )
    } else {
        let fixed = format!("{:.*}", (FLOAT_PRECISION - 1 - exp) as usize, v);
        writer.write_all(trim_fraction(&fixed).as_bytes())
    }
}

#[inline]
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
