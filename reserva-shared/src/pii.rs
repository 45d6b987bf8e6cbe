use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// Wrapper for personal data (national id, email, phone) captured by the form.
///
/// Debug and Display render a fixed mask so log macros cannot leak the value;
/// Serialize passes the inner value through so snapshots and the finalized
/// request still carry the real data for the rendering layer.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Masked<T>(T);

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Masked(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Masked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Masked<T> {
    fn from(value: T) -> Self {
        Masked(value)
    }
}

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_masked() {
        let email = Masked::new("holder@example.com".to_string());
        assert_eq!(format!("{:?}", email), "********");
        assert_eq!(format!("{}", email), "********");
    }

    #[test]
    fn serialization_keeps_the_real_value() {
        let id = Masked::new("12345678Z".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"12345678Z\"");
    }

    #[test]
    fn deref_exposes_inner_value() {
        let phone = Masked::new("600111222".to_string());
        assert_eq!(phone.as_str(), "600111222");
    }
}
