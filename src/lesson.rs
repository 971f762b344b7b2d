use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Exit code used when a lesson rejects its arguments.
pub const USAGE_ERROR: ExitCode = 2;

/// Object-safe capability exposed by a lesson unit: the operation the
/// dispatcher calls with the forwarded arguments.
///
/// Errors returned here are not interpreted by the dispatcher; they reach the
/// process boundary unchanged.
pub trait EntryOperation {
    fn invoke(&self, args: &[String], stdout: &mut dyn Write) -> Result<ExitCode>;
}

impl<F> EntryOperation for F
where
    F: Fn(&[String], &mut dyn Write) -> Result<ExitCode>,
{
    fn invoke(&self, args: &[String], stdout: &mut dyn Write) -> Result<ExitCode> {
        self(args, stdout)
    }
}

/// Lessons known at compile time.
///
/// A lesson parses its own options with [`argh`] and runs in-process.
pub trait Lesson: Sized + FromArgs {
    /// Identifier of the lesson, e.g. "aula01". Used as the program name in
    /// the lesson's usage text.
    fn name() -> &'static str;

    /// Runs the lesson body, writing its output to `stdout`.
    fn run(self, stdout: &mut dyn Write) -> Result<ExitCode>;
}

/// Adapter turning a [`Lesson`] type into an [`EntryOperation`].
pub struct Entry<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: Lesson> EntryOperation for Entry<T> {
    fn invoke(&self, args: &[String], stdout: &mut dyn Write) -> Result<ExitCode> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match T::from_args(&[T::name()], &args) {
            Ok(lesson) => lesson.run(stdout),
            Err(EarlyExit { output, status }) => {
                writeln!(stdout, "{}", output.trim_end())?;
                Ok(if status.is_err() { USAGE_ERROR } else { 0 })
            }
        }
    }
}
