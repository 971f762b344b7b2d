//! Startup-time registry of lesson units.
//!
//! Units form a tree under one base collection. Immediate children of the base
//! that are packages are lessons; flat modules next to them are not. Modules
//! hold named symbols, and the dispatcher looks up the entry operation among them.

use crate::error::LookupError;
use crate::lesson::EntryOperation;
use std::collections::BTreeMap;

/// A named item exported by a [`Module`].
pub enum Symbol {
    Entry(Box<dyn EntryOperation>),
    Value(f64),
}

impl Symbol {
    pub fn entry(op: impl EntryOperation + 'static) -> Self {
        Symbol::Entry(Box::new(op))
    }

    /// The entry operation, when this symbol can be invoked.
    pub fn as_entry(&self) -> Option<&dyn EntryOperation> {
        match self {
            Symbol::Entry(op) => Some(op.as_ref()),
            Symbol::Value(_) => None,
        }
    }
}

/// A leaf unit: a flat namespace of symbols.
#[derive(Default)]
pub struct Module {
    symbols: BTreeMap<String, Symbol>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, name: impl Into<String>, symbol: Symbol) -> Self {
        self.symbols.insert(name.into(), symbol);
        self
    }

    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }
}

/// A unit that contains other units.
#[derive(Default)]
pub struct Package {
    children: BTreeMap<String, Unit>,
}

impl Package {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, name: impl Into<String>, module: Module) -> Self {
        self.children.insert(name.into(), Unit::Module(module));
        self
    }

    pub fn with_package(mut self, name: impl Into<String>, package: Package) -> Self {
        self.children.insert(name.into(), Unit::Package(package));
        self
    }
}

pub enum Unit {
    Package(Package),
    Module(Module),
}

impl Unit {
    /// Symbols live in modules only; a package never exports one.
    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        match self {
            Unit::Module(module) => module.symbol(name),
            Unit::Package(_) => None,
        }
    }
}

/// The lesson collection rooted at a base name.
///
/// Each identifier maps to exactly one unit; registering the same name twice
/// replaces the earlier unit.
pub struct Registry {
    base: String,
    root: Package,
}

impl Registry {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            root: Package::new(),
        }
    }

    /// Registers a lesson.
    pub fn register_lesson(&mut self, id: impl Into<String>, package: Package) -> &mut Self {
        self.root.children.insert(id.into(), Unit::Package(package));
        self
    }

    /// Registers a flat module directly under the base. It is loadable but is
    /// not listed as a lesson.
    pub fn register_module(&mut self, name: impl Into<String>, module: Module) -> &mut Self {
        self.root.children.insert(name.into(), Unit::Module(module));
        self
    }

    /// Identifiers of every lesson package, ascending.
    pub fn list_lessons(&self) -> Vec<String> {
        self.root
            .children
            .iter()
            .filter(|(_, unit)| matches!(unit, Unit::Package(_)))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Loads the unit at a fully-qualified dotted path such as
    /// `aulas.aula01.app`. The first segment must be the base name; the bare
    /// base name is rejected because the collection is not itself a unit.
    pub fn load(&self, qualified: &str) -> Result<&Unit, LookupError> {
        let mut segments = qualified.split('.');
        let mut path = segments.next().unwrap_or_default().to_string();
        if path != self.base {
            return Err(LookupError::NotFound(path));
        }

        let mut segments = segments.peekable();
        if segments.peek().is_none() {
            return Err(LookupError::Collection(path));
        }

        let mut package = &self.root;
        while let Some(segment) = segments.next() {
            path.push('.');
            path.push_str(segment);
            let unit = package
                .children
                .get(segment)
                .ok_or_else(|| LookupError::NotFound(path.clone()))?;
            match unit {
                _ if segments.peek().is_none() => return Ok(unit),
                Unit::Package(inner) => package = inner,
                Unit::Module(_) => return Err(LookupError::NotAPackage(path)),
            }
        }
        Err(LookupError::NotFound(path))
    }
}
