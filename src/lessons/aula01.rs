use crate::lesson::{Entry, ExitCode, Lesson};
use crate::registry::{Module, Package, Symbol};
use anyhow::Result;
use argh::FromArgs;
use std::io::Write;

const XDATA: [f64; 3] = [1.0, 2.0, 3.0];
const YDATA: [f64; 3] = [1.0, 2.0, 3.0];

#[derive(FromArgs)]
/// Aula 01: greets someone by name.
pub struct Aula01 {
    #[argh(option, default = "String::from(\"Mundo\")")]
    /// name to greet. Defaults to "Mundo".
    pub nome: String,
}

impl Aula01 {
    pub const ID: &'static str = "aula01";
}

impl Lesson for Aula01 {
    fn name() -> &'static str {
        Self::ID
    }

    fn run(self, stdout: &mut dyn Write) -> Result<ExitCode> {
        writeln!(stdout, "[{}] Olá, {}!", Self::ID, self.nome)?;
        Ok(0)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// The `aula01` package: an `app` module exporting `run`, plus the sample means.
pub fn package() -> Package {
    Package::new().with_module(
        "app",
        Module::new()
            .with_symbol("run", Symbol::entry(Entry::<Aula01>::default()))
            .with_symbol("xbar", Symbol::Value(mean(&XDATA)))
            .with_symbol("ybar", Symbol::Value(mean(&YDATA))),
    )
}
