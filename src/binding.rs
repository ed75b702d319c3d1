//! Binding records and the module-origin capability
//!
//! A [`Binding`] is the record a container files under a service
//! identifier: an opaque payload plus a scope tag and an optional module
//! origin. The payload is whatever the resolution layer needs
//! (implementation handle, factory, constant); this crate never inspects
//! it.

use std::sync::Arc;

use crate::identifier::ServiceIdentifier;

/// Scope tag attached to a binding
///
/// Stored verbatim; the caching strategies behind each scope live in the
/// resolution layer, not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BindingScope {
    /// New activation on every resolution
    #[default]
    Transient,
    /// One activation cached for the container lifetime
    Singleton,
    /// One activation cached per resolution request
    Request,
}

/// One binding record: a payload filed under a service identifier
///
/// # Examples
///
/// ```rust
/// use bindkit::{Binding, BindingScope};
///
/// let binding = Binding::new("Warrior", "Ninja")
///     .with_scope(BindingScope::Singleton)
///     .with_module_id("combat");
///
/// assert_eq!(binding.payload(), &"Ninja");
/// assert_eq!(binding.module_id(), Some("combat"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding<P> {
    service_identifier: ServiceIdentifier,
    scope: BindingScope,
    payload: P,
    module_id: Option<String>,
}

impl<P> Binding<P> {
    /// Creates a transient binding with no module origin
    pub fn new<S>(service_identifier: S, payload: P) -> Self
    where
        S: Into<ServiceIdentifier>,
    {
        Self {
            service_identifier: service_identifier.into(),
            scope: BindingScope::default(),
            payload,
            module_id: None,
        }
    }

    /// Sets the scope tag
    pub fn with_scope(mut self, scope: BindingScope) -> Self {
        self.scope = scope;
        self
    }

    /// Records the module that contributed this binding
    pub fn with_module_id<S: Into<String>>(mut self, module_id: S) -> Self {
        self.module_id = Some(module_id.into());
        self
    }

    /// Identifier this binding is filed under
    pub fn service_identifier(&self) -> &ServiceIdentifier {
        &self.service_identifier
    }

    /// Scope tag
    pub fn scope(&self) -> BindingScope {
        self.scope
    }

    /// Borrow the payload
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the binding, returning the payload
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Module that contributed this binding, if any
    pub fn module_id(&self) -> Option<&str> {
        self.module_id.as_deref()
    }
}

/// Capability for attribute-driven bulk eviction
///
/// [`Lookup::remove_by_module_id`](crate::Lookup::remove_by_module_id)
/// needs exactly one fact about a stored value: which module contributed
/// it, if any. Keeping that behind a one-method trait lets `Lookup` stay
/// generic over arbitrary value types; values with no notion of module
/// origin return `None` and are never bulk-evicted.
pub trait ModuleScoped {
    /// Module that contributed this value, if any
    fn module_id(&self) -> Option<&str>;
}

impl<P> ModuleScoped for Binding<P> {
    fn module_id(&self) -> Option<&str> {
        self.module_id.as_deref()
    }
}

impl<T: ModuleScoped + ?Sized> ModuleScoped for Arc<T> {
    fn module_id(&self) -> Option<&str> {
        (**self).module_id()
    }
}

impl<T: ModuleScoped + ?Sized> ModuleScoped for Box<T> {
    fn module_id(&self) -> Option<&str> {
        (**self).module_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_defaults() {
        let binding = Binding::new("Warrior", 7u32);
        assert_eq!(binding.scope(), BindingScope::Transient);
        assert_eq!(binding.module_id(), None);
        assert_eq!(binding.payload(), &7);
        assert_eq!(
            binding.service_identifier(),
            &ServiceIdentifier::named("Warrior")
        );
    }

    #[test]
    fn test_binding_builder_setters() {
        let binding = Binding::new("Weapon", "Katana")
            .with_scope(BindingScope::Singleton)
            .with_module_id("combat");
        assert_eq!(binding.scope(), BindingScope::Singleton);
        assert_eq!(binding.module_id(), Some("combat"));
        assert_eq!(binding.into_payload(), "Katana");
    }

    #[test]
    fn test_module_scoped_forwarding() {
        let binding = Binding::new("Weapon", ()).with_module_id("m1");

        let shared = Arc::new(binding.clone());
        assert_eq!(ModuleScoped::module_id(&shared), Some("m1"));

        let boxed: Box<Binding<()>> = Box::new(binding);
        assert_eq!(ModuleScoped::module_id(&boxed), Some("m1"));
    }
}
