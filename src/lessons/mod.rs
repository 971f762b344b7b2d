//! Lessons shipped with the crate.

pub mod aula01;

use crate::registry::Registry;

/// Builds the registry of built-in lessons under `base`.
pub fn registry(base: &str) -> Registry {
    let mut registry = Registry::new(base);
    registry.register_lesson(aula01::Aula01::ID, aula01::package());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_lists_aula01() {
        assert_eq!(registry("aulas").list_lessons(), vec!["aula01"]);
    }
}
