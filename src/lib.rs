//! A tiny runner for numbered lesson exercises.
//!
//! Lessons are registered at startup in a [`Registry`] under a base collection
//! (`aulas` by default). The [`Dispatcher`] either lists the available lessons or
//! resolves one of them by name and calls its entry operation with the arguments
//! that followed the lesson identifier on the command line.
//!
//! The public modules [`lesson`] and [`registry`] expose the traits and types
//! needed to write your own lessons and register them.

mod dispatcher;
mod error;
pub mod lesson;
pub mod lessons;
pub mod registry;

pub use dispatcher::{Dispatcher, DispatcherConfig, Invocation, forward_args};
pub use error::{DispatchError, LookupError};
pub use registry::Registry;
