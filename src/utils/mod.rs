use std::fs;
use std::io;
use std::path::Path;

use log::trace;

mod macros;

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    trace!("writing to: {}", path.as_ref().display());
    fs::write(path, contents)
}

pub mod serde_toml_local_date {
    use core::fmt;

    use toml::value::{Date, Datetime};

    use serde::de::{self, Deserialize};
    use serde::ser::{self, Serialize};

    // NOTE: `toml::value::Datetime` is used, because
    // `toml::value::Date` does not implement `Deserialize`

    pub fn serialize<S, T>(date: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
        T: Into<Date> + Clone,
    {
        Datetime {
            date: Some(date.clone().into()),
            time: None,
            offset: None,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: de::Deserializer<'de>,
        T: TryFrom<Date>,
        T::Error: fmt::Display,
    {
        let datetime = Datetime::deserialize(deserializer)?;

        if datetime.time.is_some() || datetime.offset.is_some() {
            return Err(de::Error::custom(format!(
                "expected a date without a time, found {}",
                datetime
            )));
        }

        let date = datetime
            .date
            .ok_or_else(|| de::Error::custom("expected a date"))?;

        T::try_from(date).map_err(de::Error::custom)
    }
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use crate::date;
    use crate::time::Date;

    #[test]
    fn test_split_exact() {
        assert_eq!(
            "2024-05-01".split_exact::<3>("-"),
            [Some("2024"), Some("05"), Some("01")]
        );
        assert_eq!("2024-05".split_exact::<3>("-"), [Some("2024"), Some("05"), None]);
        assert_eq!(
            "a-b-c-d".split_exact::<3>("-"),
            [Some("a"), Some("b"), Some("c-d")]
        );
    }

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Wrapper {
        #[serde(with = "serde_toml_local_date")]
        date: Date,
    }

    #[test]
    fn test_serde_toml_local_date() {
        let wrapper: Wrapper = toml::from_str("date = 2024-05-01").unwrap();
        assert_eq!(wrapper, Wrapper { date: date!(2024:05:01) });

        assert_eq!(toml::to_string(&wrapper).unwrap(), "date = 2024-05-01\n");

        assert!(toml::from_str::<Wrapper>("date = 2024-05-01T10:00:00Z").is_err());
        assert!(toml::from_str::<Wrapper>("date = 10:00:00").is_err());
        assert!(toml::from_str::<Wrapper>("date = 2023-02-29").is_err());
    }
}
