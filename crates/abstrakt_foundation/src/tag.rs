//! Type tags, owner references, and static/instance classification.
//!
//! Participating types carry an explicit nominal identity instead of
//! relying on runtime reflection: a [`TypeTag`] names the type and links to
//! its supertype, and an [`Owner`] records whether a declaration was made
//! on the type itself or on an instance of it.

use std::fmt;

// =============================================================================
// TypeTag
// =============================================================================

/// Nominal identity of a participating type.
///
/// Tags are `static` items; subtyping is expressed by linking each tag to
/// its parent, so a hierarchy like `Circle <: Shape` is two statics where
/// `Circle`'s tag points at `Shape`'s. Tag names identify types for slot
/// bookkeeping and must be unique within one table.
///
/// An empty name marks an anonymous type; owner references to anonymous
/// types classify as instance context.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    /// The type's name; may be empty for anonymous types.
    name: &'static str,
    /// The immediate supertype, if any.
    parent: Option<&'static TypeTag>,
}

impl TypeTag {
    /// Creates a tag for a type with no supertype.
    #[must_use]
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Creates a tag for a subtype of `parent`.
    #[must_use]
    pub const fn subtype(name: &'static str, parent: &'static TypeTag) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    /// The type's name; empty for anonymous types.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The immediate supertype's tag, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&'static TypeTag> {
        self.parent
    }

    /// Iterates the hierarchy from this tag to the root, inclusive.
    pub fn ancestry(&'static self) -> impl Iterator<Item = &'static TypeTag> {
        std::iter::successors(Some(self), |tag| tag.parent)
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.name)
    }
}

// =============================================================================
// Tagged
// =============================================================================

/// Implemented by types that participate in abstract-member declarations.
///
/// The provided [`Tagged::runtime_tag`] returns the implementing type's
/// own tag. Default bodies in user traits should build their owner from
/// `self.runtime_tag()` rather than a hard-coded tag, so violation
/// messages name the type actually executing the abstract body.
pub trait Tagged {
    /// The tag identifying the implementing type.
    fn type_tag() -> &'static TypeTag
    where
        Self: Sized;

    /// The tag of this value's runtime type.
    fn runtime_tag(&self) -> &'static TypeTag
    where
        Self: Sized,
    {
        Self::type_tag()
    }
}

// =============================================================================
// Owner & Context
// =============================================================================

/// A reference to the owner of an abstract declaration: the type itself,
/// or an instance of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    /// A reference to the type itself.
    Type(&'static TypeTag),
    /// A reference to an instance, identified by its runtime type's tag.
    Instance(&'static TypeTag),
}

impl Owner {
    /// Builds a type owner for `T`.
    #[must_use]
    pub fn of<T: Tagged>() -> Self {
        Self::Type(T::type_tag())
    }

    /// Builds an instance owner carrying `value`'s runtime tag.
    #[must_use]
    pub fn of_instance<T: Tagged>(value: &T) -> Self {
        Self::Instance(value.runtime_tag())
    }

    /// The tag behind this reference.
    #[must_use]
    pub const fn tag(self) -> &'static TypeTag {
        match self {
            Self::Type(tag) | Self::Instance(tag) => tag,
        }
    }

    /// Classifies this owner as static or instance context.
    ///
    /// An owner is static only when it is a type reference carrying a
    /// non-empty name directly. Everything else, including a reference to
    /// an anonymous type, is instance context.
    #[must_use]
    pub const fn context(self) -> Context {
        match self {
            Self::Type(tag) => {
                if tag.name().is_empty() {
                    Context::Instance
                } else {
                    Context::Static
                }
            }
            Self::Instance(_) => Context::Instance,
        }
    }

    /// The type name used to qualify the member name in messages.
    ///
    /// Resolves to the owner's own type name (static case) or the runtime
    /// type's name (instance case); `None` when neither is non-empty, in
    /// which case the qualifier is omitted entirely.
    #[must_use]
    pub const fn display_name(self) -> Option<&'static str> {
        let name = self.tag().name();
        if name.is_empty() { None } else { Some(name) }
    }
}

/// Whether a declaration runs in static or instance context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Context {
    /// Evaluation scoped to a type itself, shared across instances.
    Static,
    /// Evaluation scoped to one object.
    Instance,
}

impl Context {
    /// The phrase used for this context in violation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Instance => "instance",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
