//! `serde` support for [`Vector`] (behind the `serde` cargo feature).
//!
//! - **Serialize**: as a sequence of the live elements.
//! - **Deserialize**: from any sequence, growing as elements arrive; the
//!   deserializer's size hint pre-sizes the buffer when available.

use std::fmt;
use std::marker::PhantomData;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::vec::Vector;

impl<T: Serialize> Serialize for Vector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.as_slice() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct VectorVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for VectorVisitor<T> {
    type Value = Vector<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = match seq.size_hint() {
            Some(n) => Vector::with_capacity(n),
            None => Vector::empty(),
        };
        while let Some(element) = seq.next_element::<T>()? {
            out.push(element);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(VectorVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::contig;
    use crate::vec::Vector;

    #[test]
    fn round_trips_through_json() {
        let v = contig![1, 2, 3];
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1,2,3]");

        let back: Vector<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, [1, 2, 3]);
    }

    #[test]
    fn empty_round_trip() {
        let v: Vector<i32> = Vector::empty();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[]");

        let back: Vector<i32> = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn rejects_non_sequences() {
        let err = serde_json::from_str::<Vector<i32>>(r#"{"not":"a sequence"}"#).unwrap_err();
        assert!(err.to_string().contains("a sequence of elements"));
    }

    #[test]
    fn nested_structures_round_trip() {
        let v = contig![contig![1], contig![2, 3]];
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[[1],[2,3]]");

        let back: Vector<Vector<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
