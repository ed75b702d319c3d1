//! # Bindkit: Binding Storage for Dependency-Injection Containers
//!
//! This crate provides the keyed multi-value lookup structure a
//! dependency-injection container uses to file binding records under
//! service identifiers, together with the key and record shapes around it.
//!
//! ## Key Features
//!
//! - **Heterogeneous keys**: string names compared by value; opaque tokens
//!   and type references compared by identity
//! - **Multi-value entries**: an ordered sequence of bindings per
//!   identifier, with order preserved by every operation
//! - **Attribute-driven eviction**: bulk removal of everything a module
//!   contributed, across all keys, via a narrow capability trait
//! - **Structural clone**: independent container copies whose stored
//!   records stay shared
//!
//! ## Quick Start
//!
//! ```rust
//! use bindkit::{Binding, IdentityToken, Lookup, ServiceIdentifier};
//! use std::sync::Arc;
//!
//! let mut lookup = Lookup::new();
//!
//! // Bindings filed under a string-named identifier.
//! let warrior = ServiceIdentifier::named("Warrior");
//! lookup.add(
//!     warrior.clone(),
//!     Arc::new(Binding::new(warrior.clone(), "Ninja").with_module_id("m1")),
//! )?;
//!
//! // Tokens are identity keys: equal descriptions, distinct keys.
//! let weapon = ServiceIdentifier::from(IdentityToken::new("Weapon"));
//! lookup.add(
//!     weapon.clone(),
//!     Arc::new(Binding::new(weapon.clone(), "Katana").with_module_id("m2")),
//! )?;
//!
//! assert_eq!(lookup.get(&warrior)?.len(), 1);
//!
//! // Unloading module "m1" evicts its bindings from every entry.
//! lookup.remove_by_module_id("m1");
//! assert!(!lookup.has_key(&warrior)?);
//! assert!(lookup.has_key(&weapon)?);
//! # Ok::<(), bindkit::BindkitError>(())
//! ```
//!
//! ## Concurrency
//!
//! All operations are synchronous and the structure is not internally
//! synchronized; wrap a `Lookup` in your own mutual-exclusion boundary if
//! it must be shared across threads.

#![warn(missing_docs)]

pub mod binding;
pub mod error;
pub mod identifier;
pub mod lookup;

pub use binding::{Binding, BindingScope, ModuleScoped};
pub use error::{BindkitError, Result};
pub use identifier::{IdentityToken, ServiceIdentifier, TypeKey};
pub use lookup::Lookup;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(VERSION.contains('.'));
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }
}
