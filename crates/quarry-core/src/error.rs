mod adhoc;
mod driver;
mod invalid_descriptor;
mod invalid_field;
mod invalid_group_by;
mod invalid_order_by;
mod invalid_page;
mod invalid_predicate;
mod invalid_schema;
mod invalid_threshold;
mod schema_unavailable;
mod unknown_table;

use adhoc::AdhocError;
use driver::DriverError;
use invalid_descriptor::InvalidDescriptor;
use invalid_field::InvalidField;
use invalid_group_by::InvalidGroupBy;
use invalid_order_by::InvalidOrderBy;
use invalid_page::InvalidPage;
use invalid_predicate::InvalidPredicate;
use invalid_schema::InvalidSchema;
use invalid_threshold::InvalidThreshold;
use schema_unavailable::SchemaUnavailable;
use std::sync::Arc;
use unknown_table::UnknownTable;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while loading the catalog, compiling a query, or
/// executing it.
///
/// Validation failures carry a stable kind (see [`Error::kind_name`]) and a
/// human-readable reason. None of them are retried internally.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(args)))
    }

    /// The machine-stable name of the outermost error kind.
    ///
    /// Callers surface this next to the `Display` output so clients can
    /// branch on the failure without parsing the message.
    pub fn kind_name(&self) -> &'static str {
        use self::ErrorKind::*;

        match self.kind() {
            Anyhow(_) | Adhoc(_) | Unknown => "Internal",
            Driver(_) => "Driver",
            SchemaUnavailable(_) => "SchemaUnavailable",
            InvalidSchema(_) => "InvalidSchema",
            UnknownTable(_) => "UnknownTable",
            InvalidDescriptor(_) => "InvalidDescriptor",
            InvalidField(_) => "InvalidField",
            InvalidPredicate(_) => "InvalidPredicate",
            InvalidGroupBy(_) => "InvalidGroupBy",
            InvalidOrderBy(_) => "InvalidOrderBy",
            InvalidPage(_) => "InvalidPage",
            InvalidThreshold(_) => "InvalidThreshold",
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Driver(DriverError),
    SchemaUnavailable(SchemaUnavailable),
    InvalidSchema(InvalidSchema),
    UnknownTable(UnknownTable),
    InvalidDescriptor(InvalidDescriptor),
    InvalidField(InvalidField),
    InvalidPredicate(InvalidPredicate),
    InvalidGroupBy(InvalidGroupBy),
    InvalidOrderBy(InvalidOrderBy),
    InvalidPage(InvalidPage),
    InvalidThreshold(InvalidThreshold),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            SchemaUnavailable(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            UnknownTable(err) => core::fmt::Display::fmt(err, f),
            InvalidDescriptor(err) => core::fmt::Display::fmt(err, f),
            InvalidField(err) => core::fmt::Display::fmt(err, f),
            InvalidPredicate(err) => core::fmt::Display::fmt(err, f),
            InvalidGroupBy(err) => core::fmt::Display::fmt(err, f),
            InvalidOrderBy(err) => core::fmt::Display::fmt(err, f),
            InvalidPage(err) => core::fmt::Display::fmt(err, f),
            InvalidThreshold(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown quarry error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::invalid_descriptor(err.to_string())
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
