use std::error::Error as StdError;
use std::fmt;

/// `WindowTypeResult<T>` provides a simplified result type with a common error type
pub type WindowTypeResult<T> = std::result::Result<T, ErrorWrapper>;

/// WindowTypeError defines all the internal errors that `libwintype` might return
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum WindowTypeError {
    AtomNotFound(String),
    InvalidWindowId(String),
    PropertyNotFound(String),
}
impl std::error::Error for WindowTypeError {}
impl fmt::Display for WindowTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WindowTypeError::AtomNotFound(ref err) => write!(f, "atom {} has never been interned", err),
            WindowTypeError::InvalidWindowId(ref err) => write!(f, "invalid window id was given: {}", err),
            WindowTypeError::PropertyNotFound(ref err) => write!(f, "property {} was not found", err),
        }
    }
}

/// ErrorWrapper provides a wrapper around all the underlying library dependencies that
/// `libwintype` uses such that we can easily surface all errors in a single easy way.
#[derive(Debug)]
pub enum ErrorWrapper {
    WindowType(WindowTypeError),

    // std::str::Utf8Error
    Utf8(std::str::Utf8Error),

    // x11rb errors
    Connect(x11rb::errors::ConnectError),
    Connection(x11rb::errors::ConnectionError),
    Reply(x11rb::errors::ReplyError),
}
impl ErrorWrapper {
    /// Implemented directly on the `Error` type to reduce casting required
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.as_ref().is::<T>()
    }

    /// Implemented directly on the `Error` type to reduce casting required
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.as_ref().downcast_ref::<T>()
    }

    /// Implemented directly on the `Error` type to reduce casting required
    pub fn downcast_mut<T: StdError + 'static>(&mut self) -> Option<&mut T> {
        self.as_mut().downcast_mut::<T>()
    }

    /// Implemented directly on the `Error` type to reduce casting required
    /// which allows for using as_ref to get the correct pass through.
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.as_ref().source()
    }
}
impl StdError for ErrorWrapper {}

impl fmt::Display for ErrorWrapper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorWrapper::WindowType(ref err) => write!(f, "{}", err),
            ErrorWrapper::Utf8(ref err) => write!(f, "{}", err),
            ErrorWrapper::Connect(ref err) => write!(f, "{}", err),
            ErrorWrapper::Connection(ref err) => write!(f, "{}", err),
            ErrorWrapper::Reply(ref err) => write!(f, "{}", err),
        }
    }
}

impl AsRef<dyn StdError> for ErrorWrapper {
    fn as_ref(&self) -> &(dyn StdError + 'static) {
        match *self {
            ErrorWrapper::WindowType(ref err) => err,
            ErrorWrapper::Utf8(ref err) => err,
            ErrorWrapper::Connect(ref err) => err,
            ErrorWrapper::Connection(ref err) => err,
            ErrorWrapper::Reply(ref err) => err,
        }
    }
}

impl AsMut<dyn StdError> for ErrorWrapper {
    fn as_mut(&mut self) -> &mut (dyn StdError + 'static) {
        match *self {
            ErrorWrapper::WindowType(ref mut err) => err,
            ErrorWrapper::Utf8(ref mut err) => err,
            ErrorWrapper::Connect(ref mut err) => err,
            ErrorWrapper::Connection(ref mut err) => err,
            ErrorWrapper::Reply(ref mut err) => err,
        }
    }
}

impl From<WindowTypeError> for ErrorWrapper {
    fn from(err: WindowTypeError) -> ErrorWrapper {
        ErrorWrapper::WindowType(err)
    }
}

impl From<std::str::Utf8Error> for ErrorWrapper {
    fn from(err: std::str::Utf8Error) -> ErrorWrapper {
        ErrorWrapper::Utf8(err)
    }
}

// x11rb errors
//--------------------------------------------------------------------------------------------------
impl From<x11rb::errors::ConnectError> for ErrorWrapper {
    fn from(err: x11rb::errors::ConnectError) -> ErrorWrapper {
        ErrorWrapper::Connect(err)
    }
}

impl From<x11rb::errors::ConnectionError> for ErrorWrapper {
    fn from(err: x11rb::errors::ConnectionError) -> ErrorWrapper {
        ErrorWrapper::Connection(err)
    }
}

impl From<x11rb::errors::ReplyError> for ErrorWrapper {
    fn from(err: x11rb::errors::ReplyError) -> ErrorWrapper {
        ErrorWrapper::Reply(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_type_error_display() {
        assert_eq!(
            WindowTypeError::PropertyNotFound("_NET_WM_WINDOW_TYPE".to_owned()).to_string(),
            "property _NET_WM_WINDOW_TYPE was not found"
        );
        assert_eq!(
            WindowTypeError::AtomNotFound("_NET_WM_WINDOW_TYPE".to_owned()).to_string(),
            "atom _NET_WM_WINDOW_TYPE has never been interned"
        );
        assert_eq!(
            WindowTypeError::InvalidWindowId("foo".to_owned()).to_string(),
            "invalid window id was given: foo"
        );
    }

    #[test]
    fn test_wrapper_display_passes_through() {
        let err = ErrorWrapper::from(WindowTypeError::PropertyNotFound("_NET_WM_WINDOW_TYPE".to_owned()));
        assert_eq!(err.to_string(), "property _NET_WM_WINDOW_TYPE was not found");
    }

    #[test]
    fn test_wrapper_downcasting() {
        let err = ErrorWrapper::from(WindowTypeError::AtomNotFound("WM_NAME".to_owned()));
        assert!(err.is::<WindowTypeError>());
        assert_eq!(
            err.downcast_ref::<WindowTypeError>(),
            Some(&WindowTypeError::AtomNotFound("WM_NAME".to_owned()))
        );

        let err = ErrorWrapper::from(std::str::from_utf8(&[0xff]).unwrap_err());
        assert!(err.is::<std::str::Utf8Error>());
        assert!(!err.is::<WindowTypeError>());
    }
}
