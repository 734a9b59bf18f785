//! `serde` support: a tub serializes exactly like `Option<T>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Tub;

impl<T: Serialize> Serialize for Tub<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tub<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_serde_matches_option() {
        let present = Tub::from(Point { x: 1, y: 2 });
        let json = serde_json::to_string(&present).unwrap();
        assert_eq!(json, serde_json::to_string(&Some(Point { x: 1, y: 2 })).unwrap());

        let absent: Tub<Point> = Tub::new();
        assert_eq!(serde_json::to_string(&absent).unwrap(), "null");

        let back: Tub<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, present);
        let back: Tub<Point> = serde_json::from_str("null").unwrap();
        assert!(!back.is_present());
    }
}
