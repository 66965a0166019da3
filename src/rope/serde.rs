//! `Serialize`/`Deserialize` for [`Rope`]: a rope serializes as its
//! flattened string form and deserializes from one.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::Rope;

impl Serialize for Rope {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // `collect_str` drains the `Display` impl chunk by chunk, so
        // serializing doesn't materialize the whole rope first.
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rope {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RopeVisitor;

        impl de::Visitor<'_> for RopeVisitor {
            type Value = Rope;

            #[inline]
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string")
            }

            #[inline]
            fn visit_str<E: de::Error>(self, s: &str) -> Result<Rope, E> {
                Ok(Rope::from(s))
            }
        }

        deserializer.deserialize_str(RopeVisitor)
    }
}
