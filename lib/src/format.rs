use serde::de::DeserializeOwned;

use crate::error::{ErrorDetail, Result};

pub trait Format: Sized {
    /// The data format's error type.
    type Error: serde::de::Error + ErrorDetail + 'static;

    /// Parses `string` in this format as a `T`.
    fn from_str<T: DeserializeOwned>(string: &str) -> Result<T, Self::Error>;
}

macro_rules! impl_format {
    ($name:ident : $func:expr, $E:ty) => (
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Format for $name {
            type Error = $E;

            fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, $E> {
                $func(s)
            }
        }
    );
}

impl_format!(Toml: toml::from_str, toml::de::Error);

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Page {
        title: String,
    }

    #[test]
    fn toml_errors_carry_their_position() {
        let page: Page = Toml::from_str("title = \"Zoning\"").unwrap();
        assert_eq!(page, Page { title: "Zoning".into() });

        let error = crate::error::Error::from(Toml::from_str::<Page>("title = ").unwrap_err());
        assert!(error.to_string().contains("line 1"));
    }
}
