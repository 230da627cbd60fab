use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Serializer, Serialize, Deserialize, Deserializer};
use serde::de::{self, Visitor};

use failure_derive::Fail;

/// A release version of minecraft, like `1.20.1`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MinecraftVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>
}
impl MinecraftVersion {
    #[inline]
    pub const fn new(major: u32, minor: u32, patch: Option<u32>) -> MinecraftVersion {
        MinecraftVersion { major, minor, patch }
    }
}
impl FromStr for MinecraftVersion {
    type Err = InvalidMinecraftVersion;

    fn from_str(s: &str) -> Result<Self, InvalidMinecraftVersion> {
        let error = || InvalidMinecraftVersion(s.into());
        let mut parts = s.split('.')
            .map(|part| part.parse::<u32>().map_err(|_| error()));
        let major = parts.next().ok_or_else(error)??;
        let minor = parts.next().ok_or_else(error)??;
        let patch = parts.next().transpose()?;
        if parts.next().is_some() {
            return Err(error())
        }
        Ok(MinecraftVersion { major, minor, patch })
    }
}
impl Display for MinecraftVersion {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        Ok(())
    }
}
/// Always serialized as its string form, like `"1.20.1"`
impl Serialize for MinecraftVersion {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
        S: Serializer {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for MinecraftVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
        D: Deserializer<'de> {
        struct VersionVisitor;
        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = MinecraftVersion;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a minecraft version")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<MinecraftVersion, E> where
                E: de::Error {
                MinecraftVersion::from_str(v).map_err(E::custom)
            }
        }
        deserializer.deserialize_str(VersionVisitor)
    }
}
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
#[fail(display = "Invalid minecraft version {:?}", _0)]
pub struct InvalidMinecraftVersion(pub String);
