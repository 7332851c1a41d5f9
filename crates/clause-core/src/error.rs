use crate::stmt::Comparison;

/// Creates and returns an adhoc [`Error`] from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// An error raised while building an object map or rendering a predicate
/// tree.
///
/// All variants are configuration errors: they indicate a logic error in how
/// the caller constructed its maps or predicates, and are never retryable.
/// The offending property and operator are carried on the error and exposed
/// through the accessor methods.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(anyhow::Error),
    DuplicateProperty { entity: String, property: String },
    EmptyExists { entity: String },
    InvalidOperand {
        property: String,
        op: Comparison,
        message: &'static str,
    },
    UnknownEntity { entity: String },
    UnknownProperty { entity: String, property: String },
}

impl Error {
    /// Creates an adhoc error from format arguments.
    ///
    /// Prefer the [`bail!`](crate::bail) macro over calling this directly.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Self {
        ErrorKind::Adhoc(anyhow::Error::msg(args.to_string())).into()
    }

    /// An object map declared the same property name twice.
    pub fn duplicate_property(entity: impl Into<String>, property: impl Into<String>) -> Self {
        ErrorKind::DuplicateProperty {
            entity: entity.into(),
            property: property.into(),
        }
        .into()
    }

    /// An `EXISTS` predicate wrapped a child that rendered to nothing.
    pub fn empty_exists(entity: impl Into<String>) -> Self {
        ErrorKind::EmptyExists {
            entity: entity.into(),
        }
        .into()
    }

    /// An operator was paired with a value shape it cannot render.
    pub fn invalid_operand(
        property: impl Into<String>,
        op: Comparison,
        message: &'static str,
    ) -> Self {
        ErrorKind::InvalidOperand {
            property: property.into(),
            op,
            message,
        }
        .into()
    }

    /// A predicate referenced an entity missing from the catalog.
    pub fn unknown_entity(entity: impl Into<String>) -> Self {
        ErrorKind::UnknownEntity {
            entity: entity.into(),
        }
        .into()
    }

    /// A property name did not resolve to a column in the entity's map.
    pub fn unknown_property(entity: impl Into<String>, property: impl Into<String>) -> Self {
        ErrorKind::UnknownProperty {
            entity: entity.into(),
            property: property.into(),
        }
        .into()
    }

    pub fn is_duplicate_property(&self) -> bool {
        matches!(self.kind, ErrorKind::DuplicateProperty { .. })
    }

    pub fn is_empty_exists(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyExists { .. })
    }

    pub fn is_invalid_operand(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidOperand { .. })
    }

    pub fn is_unknown_entity(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownEntity { .. })
    }

    pub fn is_unknown_property(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownProperty { .. })
    }

    /// The property name the error is about, when there is one.
    pub fn property(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::DuplicateProperty { property, .. } => Some(property),
            ErrorKind::InvalidOperand { property, .. } => Some(property),
            ErrorKind::UnknownProperty { property, .. } => Some(property),
            _ => None,
        }
    }

    /// The entity name the error is about, when there is one.
    pub fn entity(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::DuplicateProperty { entity, .. } => Some(entity),
            ErrorKind::EmptyExists { entity } => Some(entity),
            ErrorKind::UnknownEntity { entity } => Some(entity),
            ErrorKind::UnknownProperty { entity, .. } => Some(entity),
            _ => None,
        }
    }

    /// The operator the error is about, when there is one.
    pub fn op(&self) -> Option<Comparison> {
        match &self.kind {
            ErrorKind::InvalidOperand { op, .. } => Some(*op),
            _ => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Adhoc(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ErrorKind::Adhoc(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::DuplicateProperty { entity, property } => {
                write!(f, "duplicate property `{property}` on entity `{entity}`")
            }
            ErrorKind::EmptyExists { entity } => {
                write!(f, "EXISTS over entity `{entity}` wraps a predicate that renders to nothing")
            }
            ErrorKind::InvalidOperand {
                property,
                op,
                message,
            } => {
                write!(f, "invalid operand for `{property}` {op}: {message}")
            }
            ErrorKind::UnknownEntity { entity } => {
                write!(f, "unknown entity `{entity}`")
            }
            ErrorKind::UnknownProperty { entity, property } => {
                write!(f, "unknown property `{property}` on entity `{entity}`")
            }
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        ErrorKind::Adhoc(err).into()
    }
}
