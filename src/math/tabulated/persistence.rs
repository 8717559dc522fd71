//! Byte and text streams of tabulated functions.
//!
//! Binary layout, big-endian: `i32` point count followed by `count` pairs of
//! `f64` x and `f64` y.
//!
//! Text layout: the point count, then `count` pairs `x y`. Tokens are
//! separated by any whitespace, so line breaks carry no meaning.
//!
//! Reading goes through the points constructor of the registry's current
//! backend, so malformed orderings fail exactly as manual construction would.

use std::io::{
    BufWriter,
    Read,
    Write
};

use log::debug;

use crate::math::function::functionerror::FunctionError;
use crate::math::tabulated::functionpoint::FunctionPoint;
use crate::math::tabulated::tabulatedfunction::TabulatedFunction;
use crate::math::tabulated::tabulatedfunctions::TabulatedFunctions;

pub fn output_tabulated_function<F, W>(function: &F, out: W) -> Result<(), FunctionError> where
    F: TabulatedFunction + ?Sized,
    W: Write {
    let count = i32::try_from(function.points_count()).map_err(|_| FunctionError::InvalidArgument(
        format!("{} points do not fit the binary format", function.points_count())
    ))?;

    let mut writer = BufWriter::new(out);
    writer.write_all(&count.to_be_bytes())?;
    for pt in function.iter() {
        writer.write_all(&pt.x().to_be_bytes())?;
        writer.write_all(&pt.y().to_be_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_tabulated_function<F, W>(function: &F, out: W) -> Result<(), FunctionError> where
    F: TabulatedFunction + ?Sized,
    W: Write {
    let mut writer = BufWriter::new(out);
    writeln!(writer, "{}", function.points_count())?;
    for pt in function.iter() {
        writeln!(writer, "{} {}", pt.x(), pt.y())?;
    }
    writer.flush()?;
    Ok(())
}

impl TabulatedFunctions {
    pub fn input_tabulated_function<R>(&self, mut input: R) -> Result<Box<dyn TabulatedFunction>, FunctionError> where
        R: Read {
        let count = read_i32(&mut input)?;
        let count = usize::try_from(count).map_err(|_| FunctionError::MalformedInput(
            format!("negative point count {}", count)
        ))?;

        let mut points = Vec::with_capacity(count.min(1 << 16));
        for _ in 0..count {
            let x = read_f64(&mut input)?;
            let y = read_f64(&mut input)?;
            points.push(FunctionPoint::new(x, y));
        }
        debug!("read {} points from a binary stream", count);
        self.create_tabulated_function_from_points(&points)
    }

    pub fn read_tabulated_function<R>(&self, mut input: R) -> Result<Box<dyn TabulatedFunction>, FunctionError> where
        R: Read {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace();

        let count_token = next_token(&mut tokens, "point count")?;
        let count: usize = count_token.parse().map_err(|_| FunctionError::MalformedInput(
            format!("'{}' is not a point count", count_token)
        ))?;

        let mut points = Vec::with_capacity(count.min(1 << 16));
        for _ in 0..count {
            let x = parse_f64(next_token(&mut tokens, "abscissa")?)?;
            let y = parse_f64(next_token(&mut tokens, "ordinate")?)?;
            points.push(FunctionPoint::new(x, y));
        }
        debug!("read {} points from a text stream", count);
        self.create_tabulated_function_from_points(&points)
    }
}

fn read_i32<R: Read>(input: &mut R) -> Result<i32, FunctionError> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

fn read_f64<R: Read>(input: &mut R) -> Result<f64, FunctionError> {
    let mut buf = [0u8; 8];
    input.read_exact(&mut buf)?;
    Ok(f64::from_be_bytes(buf))
}

fn next_token<'a, I>(tokens: &mut I, what: &str) -> Result<&'a str, FunctionError> where
    I: Iterator<Item = &'a str> {
    tokens.next().ok_or_else(|| FunctionError::MalformedInput(format!("missing {}", what)))
}

fn parse_f64(token: &str) -> Result<f64, FunctionError> {
    token.parse().map_err(|_| FunctionError::MalformedInput(format!("'{}' is not a number", token)))
}
