//! Service identifier keys
//!
//! A binding is filed under one of three key classes: a plain string
//! name, an opaque identity token, or a Rust type. The classes differ in
//! their equality rule:
//!
//! - **`Named`** - compared by string value; two identifiers built from
//!   equal strings are the same key
//! - **`Token`** - compared by identity; two tokens created with equal
//!   descriptions are *different* keys, only clones of one token match
//! - **`Type`** - compared by [`TypeId`]; the same type is the same key
//!   everywhere in the process

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{BindkitError, Result};

/// Monotonic source of token identities
static NEXT_TOKEN_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque reference-identity token
///
/// Identity is carried by a process-unique handle assigned at creation
/// time, so tokens remain usable as hash-map keys without relying on
/// pointer comparison. The description is diagnostic only and does not
/// participate in equality or hashing.
///
/// # Examples
///
/// ```rust
/// use bindkit::IdentityToken;
///
/// let a = IdentityToken::new("Weapon");
/// let b = IdentityToken::new("Weapon");
///
/// assert_ne!(a, b);          // equal descriptions, distinct identities
/// assert_eq!(a, a.clone());  // a clone carries the same identity
/// ```
#[derive(Clone, Debug)]
pub struct IdentityToken {
    id: u64,
    description: Arc<str>,
}

impl IdentityToken {
    /// Creates a token with a fresh identity
    pub fn new<S: Into<Arc<str>>>(description: S) -> Self {
        Self {
            id: NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed),
            description: description.into(),
        }
    }

    /// Human-readable description of the token
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for IdentityToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for IdentityToken {}

impl Hash for IdentityToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}#{})", self.description, self.id)
    }
}

/// Type-reference key with identity given by [`TypeId`]
///
/// The stored type name is kept for diagnostics only; equality and
/// hashing use the `TypeId` alone.
#[derive(Clone, Copy, Debug)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Full name of the referenced type
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Key under which bindings are filed
///
/// # Examples
///
/// ```rust
/// use bindkit::ServiceIdentifier;
///
/// let by_name = ServiceIdentifier::named("Warrior");
/// assert_eq!(by_name, ServiceIdentifier::named("Warrior"));
///
/// struct Katana;
/// let by_type = ServiceIdentifier::of::<Katana>();
/// assert_eq!(by_type, ServiceIdentifier::of::<Katana>());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ServiceIdentifier {
    /// Plain string name, compared by value
    Named(Arc<str>),
    /// Opaque token, compared by identity
    Token(IdentityToken),
    /// Type reference, compared by `TypeId`
    Type(TypeKey),
}

impl ServiceIdentifier {
    /// String-named identifier
    pub fn named<S: Into<Arc<str>>>(name: S) -> Self {
        Self::Named(name.into())
    }

    /// Identifier for the type `T`
    pub fn of<T: 'static>() -> Self {
        Self::Type(TypeKey::of::<T>())
    }

    /// Rejects the blank identifier
    ///
    /// A `Named` key with an empty name is the one representable form of
    /// an absent identifier; every lookup operation rejects it up front.
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Self::Named(name) if name.is_empty() => {
                Err(BindkitError::null_argument("service_identifier"))
            }
            _ => Ok(()),
        }
    }
}

impl From<&str> for ServiceIdentifier {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for ServiceIdentifier {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<IdentityToken> for ServiceIdentifier {
    fn from(token: IdentityToken) -> Self {
        Self::Token(token)
    }
}

impl From<TypeKey> for ServiceIdentifier {
    fn from(key: TypeKey) -> Self {
        Self::Type(key)
    }
}

impl fmt::Display for ServiceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Token(token) => token.fmt(f),
            Self::Type(key) => key.fmt(f),
        }
    }
}
