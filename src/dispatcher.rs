use crate::error::DispatchError;
use crate::lesson::{EntryOperation, ExitCode};
use crate::lessons;
use crate::registry::{Registry, Symbol};
use argh::{EarlyExit, FromArgs};
use log::{debug, warn};
use std::io::Write;

/// Token some shells leave in front of forwarded arguments.
pub const SEPARATOR: &str = "--";

/// Naming convention used to find a lesson's entry operation:
/// `<base>.<lesson>.<entry_unit>` exporting `<entry_symbol>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Program name shown in usage text.
    pub prog: String,
    pub base: String,
    pub entry_unit: String,
    pub entry_symbol: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            prog: "aulas".to_string(),
            base: "aulas".to_string(),
            entry_unit: "app".to_string(),
            entry_symbol: "run".to_string(),
        }
    }
}

#[derive(FromArgs)]
/// Lesson runner: aulas <lesson> [-- lesson-args]
struct RawInvocation {
    #[argh(positional, greedy)]
    /// lesson to run (e.g. aula01) followed by the arguments forwarded to it.
    /// Lists the available lessons when empty.
    args: Vec<String>,
}

/// A parsed command line: the optional lesson and everything after it.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub lesson: Option<String>,
    pub lesson_args: Vec<String>,
}

impl Invocation {
    /// Once the lesson identifier is seen, every later token belongs to the
    /// lesson, options included.
    pub fn parse(prog: &str, argv: &[String]) -> Result<Self, EarlyExit> {
        let args: Vec<&str> = argv.iter().map(String::as_str).collect();
        let mut args = RawInvocation::from_args(&[prog], &args)?.args.into_iter();
        Ok(Self {
            lesson: args.next(),
            lesson_args: args.collect(),
        })
    }
}

/// Drops every [`SEPARATOR`] token, keeping the rest in order.
pub fn forward_args(args: &[String]) -> Vec<String> {
    args.iter()
        .filter(|arg| arg.as_str() != SEPARATOR)
        .cloned()
        .collect()
}

/// Routes a command line either to the lesson listing or to one lesson.
///
/// Example
/// ```
/// use aulas::Dispatcher;
/// let mut out = Vec::new();
/// let code = Dispatcher::default().main(Some(vec![]), &mut out, &mut Vec::new());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("  - aula01"));
/// ```
pub struct Dispatcher {
    config: DispatcherConfig,
    registry: Registry,
}

impl Dispatcher {
    pub fn new(config: DispatcherConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    pub fn list_lessons(&self) -> Vec<String> {
        self.registry.list_lessons()
    }

    /// Finds the entry operation of `lesson` following the configured naming
    /// convention.
    pub fn resolve_entry(&self, lesson: &str) -> Result<&dyn EntryOperation, DispatchError> {
        let unit_name = format!(
            "{}.{}.{}",
            self.config.base, lesson, self.config.entry_unit
        );
        debug!("resolving {unit_name}");

        let unit = self.registry.load(&unit_name).map_err(|source| {
            warn!("cannot load {unit_name}: {source}");
            DispatchError::LessonNotFound {
                unit: unit_name.clone(),
                source,
            }
        })?;

        unit.symbol(&self.config.entry_symbol)
            .and_then(Symbol::as_entry)
            .ok_or_else(|| {
                warn!("{unit_name} has no entry '{}'", self.config.entry_symbol);
                DispatchError::EntryMissing {
                    unit: unit_name,
                    symbol: self.config.entry_symbol.clone(),
                }
            })
    }

    /// Lists lessons when none was requested, otherwise runs the requested one
    /// with its separator-free arguments.
    pub fn dispatch(
        &self,
        invocation: Invocation,
        stdout: &mut dyn Write,
    ) -> Result<ExitCode, DispatchError> {
        let Some(lesson) = invocation.lesson else {
            return self.print_lessons(stdout);
        };

        let args = forward_args(&invocation.lesson_args);
        let entry = self.resolve_entry(&lesson)?;
        debug!("running {lesson} with {args:?}");
        Ok(entry.invoke(&args, stdout)?)
    }

    /// Parses `argv` (the process arguments when `None`), dispatches, and
    /// reports any failure. Returns the process exit code.
    pub fn main(
        &self,
        argv: Option<Vec<String>>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ExitCode {
        let argv = argv.unwrap_or_else(|| std::env::args().skip(1).collect());
        let result = match Invocation::parse(&self.config.prog, &argv) {
            Ok(invocation) => self.dispatch(invocation, stdout),
            Err(EarlyExit {
                output,
                status: Ok(()),
            }) => writeln!(stdout, "{}", output.trim_end())
                .map(|_| 0)
                .map_err(DispatchError::from),
            Err(EarlyExit {
                output,
                status: Err(()),
            }) => Err(DispatchError::Usage(output.trim_end().to_string())),
        };

        match result {
            Ok(code) => code,
            Err(err) => {
                // An empty collection is informational, not a failure report.
                let reported = match err {
                    DispatchError::EmptyRegistry { .. } => writeln!(stdout, "{err:#}"),
                    _ => writeln!(stderr, "{err:#}"),
                };
                if let Err(write_err) = reported {
                    warn!("cannot report '{err}': {write_err}");
                }
                err.exit_code()
            }
        }
    }

    fn print_lessons(&self, stdout: &mut dyn Write) -> Result<ExitCode, DispatchError> {
        let lessons = self.list_lessons();
        if lessons.is_empty() {
            return Err(DispatchError::EmptyRegistry {
                base: self.config.base.clone(),
            });
        }

        writeln!(stdout, "Aulas disponíveis:")?;
        for name in &lessons {
            writeln!(stdout, "  - {name}")?;
        }
        writeln!(stdout, "\nExemplo: {} aula01 -- --foo 123", self.config.prog)?;
        Ok(0)
    }
}

impl Default for Dispatcher {
    /// Dispatcher over the built-in lessons with the default naming convention.
    fn default() -> Self {
        let config = DispatcherConfig::default();
        let registry = lessons::registry(&config.base);
        Self::new(config, registry)
    }
}
