//! Guarded division walk-through.
//!
//! Divides 3 by 2, then 3 by 0. The second division fails; the failure is
//! caught and printed, and a closing line is written on every exit path.

use super::models::{ArithmeticError, Integer};
use log::{debug, error};
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

/// Line written after the protected block, whatever its outcome
pub const CONTINUE_LINE: &str = "Continue...";

/// Prefix for a caught division failure
pub const EXCEPTION_PREFIX: &str = "Exception: ";

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Borrows the output stream and writes [`CONTINUE_LINE`] to it when dropped,
/// including during unwinding.
struct Finally<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Finally<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: Write> Deref for Finally<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        &*self.out
    }
}

impl<W: Write> DerefMut for Finally<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        &mut *self.out
    }
}

impl<W: Write> Drop for Finally<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = writeln!(self.out, "{}", CONTINUE_LINE) {
            error!("Failed to write closing line: {}", e);
        }
    }
}

fn print_quotient<W: Write>(out: &mut W, dividend: Integer, divisor: Integer) -> Result<(), DemoError> {
    let quotient = dividend.div(divisor)?;
    writeln!(out, "{}", quotient)?;
    Ok(())
}

/// Run `body` against `out`, print a division failure as
/// `Exception: <message>`, then write the closing line.
///
/// I/O errors from `body` are not caught and are returned after the closing
/// line has been attempted.
fn guarded<W, F>(out: &mut W, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<(), DemoError>,
{
    let mut out = Finally::new(out);
    match body(&mut *out) {
        Ok(()) => Ok(()),
        Err(DemoError::Arithmetic(e)) => {
            debug!("Caught arithmetic error: {}", e);
            writeln!(out, "{}{}", EXCEPTION_PREFIX, e)
        }
        Err(DemoError::Io(e)) => Err(e),
    }
}

/// Print `3 / 2`, attempt `3 / 0`, report the failure and always finish with
/// [`CONTINUE_LINE`].
pub fn run_division_demo<W: Write>(out: &mut W) -> io::Result<()> {
    let three = Integer::new(3);
    let two = Integer::new(2);
    let zero = Integer::default();

    guarded(out, |out| {
        print_quotient(out, three, two)?;
        print_quotient(out, three, zero)?;
        Ok(())
    })
}
