use std::{fmt, io};
use std::panic::Location;
use std::error::Error as StdError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failure with human-readable detail and an optional chain of causes.
///
/// Each detail is a message plus `(key, value)` context pairs. Errors built
/// with [`Chainable::chain()`] nest the earlier error beneath the later one
/// so that the outermost context prints first.
#[derive(Debug)]
pub struct Error {
    detail: Vec<Box<dyn ErrorDetail>>,
    prev: Option<Box<Error>>,
    location: &'static Location<'static>,
}

pub trait ErrorDetail: fmt::Display + fmt::Debug + Send + Sync {
    fn context(&self) -> Vec<(Option<String>, String)> { vec![] }
}

impl Error {
    /// Places `self` at the bottom of `outer`'s chain and returns `outer`.
    pub fn chain(self, mut outer: Error) -> Self {
        fn bury(error: Error, behind: &mut Error) {
            match behind.prev.as_mut() {
                Some(prev) => bury(error, prev),
                None => behind.prev = Some(Box::new(error)),
            }
        }

        bury(self, &mut outer);
        outer
    }

    /// The top-level messages of this error, without context or causes.
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.detail.iter().map(|d| d.to_string())
    }

    /// The error this one was chained on top of, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.prev.as_deref()
    }
}

impl ErrorDetail for &(dyn StdError + Send + Sync) {
    fn context(&self) -> Vec<(Option<String>, String)> {
        let mut ctxt = vec![];
        let mut error = self.source();
        while let Some(e) = error {
            ctxt.push((None, e.to_string()));
            error = e.source();
        }

        ctxt
    }
}

macro_rules! impl_error_detail_with_std_error {
    ($($T:ty),* $(,)?) => {$(
        impl $crate::error::ErrorDetail for $T {
            fn context(&self) -> Vec<(Option<String>, String)> {
                let error: &(dyn std::error::Error + Send + Sync) = self;
                error.context()
            }
        }
    )*}
}

impl_error_detail_with_std_error!(io::Error, toml::de::Error, jwalk::Error);

impl ErrorDetail for String { }
impl ErrorDetail for &'static str { }

impl<T: ErrorDetail + 'static> From<T> for Error {
    #[track_caller]
    fn from(detail: T) -> Self {
        Error {
            detail: vec![Box::new(detail)],
            prev: None,
            location: Location::caller(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn nested(f: &mut fmt::Formatter<'_>, depth: usize, e: &Error) -> fmt::Result {
            let indent = " ".repeat(depth * 4);
            let newline = format!("\n{indent}");
            for detail in &e.detail {
                writeln!(f, "{indent}{}", detail.to_string().replace('\n', &newline))?;
                if let Some(prev) = &e.prev {
                    nested(f, depth + 1, prev)?;
                }

                for (key, value) in detail.context() {
                    let value = value.replace('\n', &newline);
                    match key {
                        Some(key) => writeln!(f, "{indent}{key}: {value}")?,
                        None => writeln!(f, "{indent}{value}")?,
                    }
                }

                if std::env::var_os("RUST_BACKTRACE").is_some() {
                    writeln!(f, "{indent}[{}]", e.location)?;
                }
            }

            Ok(())
        }

        nested(f, 0, self)
    }
}

/// An ad-hoc error detail, typically built via [`error!`](crate::error!).
#[derive(Debug)]
pub struct Message {
    pub message: String,
    pub parameters: Vec<(Option<String>, String)>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl ErrorDetail for Message {
    fn context(&self) -> Vec<(Option<String>, String)> {
        self.parameters.clone()
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! err {
    ($($token:tt)*) => (Err($crate::error!($($token)*)));
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    (@param $v:ident $key:expr => $value:expr, $($rest:tt)*) => {
        $crate::error!(@param $v $key => $value);
        $crate::error!(@param $v $($rest)*);
    };

    (@param $v:ident $key:expr => $value:expr) => {
        $v.push((Some($key.to_string()), $value.to_string()));
    };

    (@param $v:ident $value:expr, $($rest:tt)*) => {
        $crate::error!(@param $v $value);
        $crate::error!(@param $v $($rest)*);
    };

    (@param $v:ident $value:expr) => {
        $v.push((None, $value.to_string()));
    };

    (@param $v:ident $(,)?) => { };

    ($msg:expr, $($rest:tt)*) => (
        $crate::error::Error::from($crate::error::Message {
            message: $msg.to_string(),
            parameters: {
                #[allow(unused_mut)]
                let mut v: Vec<(Option<String>, String)> = Vec::new();
                $crate::error!(@param v $($rest)*);
                v
            },
        })
    );

    ($msg:expr) => ($crate::error!($msg,));
}

pub trait Chainable<T> {
    fn chain(self, outer: impl Into<Error>) -> Result<T>;

    fn chain_with<F, E>(self, f: F) -> Result<T>
        where F: FnOnce() -> E, E: Into<Error>;
}

impl<T, E: Into<Error>> Chainable<T> for Result<T, E> {
    #[track_caller]
    fn chain(self, outer: impl Into<Error>) -> Result<T> {
        self.map_err(|e| e.into().chain(outer.into()))
    }

    #[track_caller]
    fn chain_with<F, Err>(self, f: F) -> Result<T>
        where F: FnOnce() -> Err, Err: Into<Error>,
    {
        self.map_err(|e| e.into().chain(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn error_macro_collects_parameters() {
        let error = error! {
            "something failed",
            "path" => "site/a.html",
            "bare context",
        };

        let rendered = error.to_string();
        assert!(rendered.starts_with("something failed\npath: site/a.html\nbare context\n"));
    }

    #[test]
    fn chained_errors_nest_the_cause() {
        let result: Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .chain(error!("failed to read document", "path" => "x.html"));

        let error = result.unwrap_err();
        assert_eq!(error.messages().collect::<Vec<_>>(), ["failed to read document"]);
        assert_eq!(error.cause().unwrap().messages().collect::<Vec<_>>(), ["gone"]);

        let rendered = error.to_string();
        assert!(rendered.starts_with("failed to read document\n    gone\n"));
        assert!(rendered.contains("path: x.html"));
    }

    #[test]
    fn chain_with_is_lazy() {
        let ok: Result<u8, &'static str> = Ok(3);
        let value = ok.chain_with(|| -> &'static str { panic!("not called") }).unwrap();
        assert_eq!(value, 3);
    }
}
