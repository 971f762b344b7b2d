//! Error taxonomy of the dispatcher.
//!
//! Every variant is terminal for the process; [`DispatchError::exit_code`]
//! gives the status the binary exits with.

use crate::lesson::{ExitCode, USAGE_ERROR};
use thiserror::Error;

/// Failure to walk a dotted unit path in the [`Registry`](crate::Registry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no lesson unit named '{0}'")]
    NotFound(String),
    #[error("'{0}' is a module, not a package")]
    NotAPackage(String),
    #[error("'{0}' is the lesson collection itself, not a unit inside it")]
    Collection(String),
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Não encontrei o módulo '{unit}'. Detalhe: {source}")]
    LessonNotFound {
        unit: String,
        #[source]
        source: LookupError,
    },
    #[error("O módulo '{unit}' não possui a função '{symbol}(args)'.")]
    EntryMissing { unit: String, symbol: String },
    #[error("Nenhuma aula encontrada em '{base}'.")]
    EmptyRegistry { base: String },
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Lesson(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DispatchError::Usage(_) => USAGE_ERROR,
            _ => 1,
        }
    }
}
