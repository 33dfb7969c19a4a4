//! Optional trait implementations: wiping and serialization.

use zeroize::Zeroize;

use crate::{Result, TypedResult};

/// Wipes the value, if there is one. Generic errors are shared and
/// are left alone.
impl<T: Zeroize> Zeroize for Result<T> {
    fn zeroize(&mut self) {
        if let Ok(value) = &mut self.inner {
            value.zeroize();
        }
    }
}

/// Wipes whichever slot is live. The discriminant is kept.
impl<T: Zeroize, E: Zeroize> Zeroize for TypedResult<T, E> {
    fn zeroize(&mut self) {
        match &mut self.inner {
            Ok(value) => value.zeroize(),
            Err(error) => error.zeroize(),
        }
    }
}

// The containers derive `serde(transparent)`; only the generic error
// needs a hand-written form, as its message.
#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::string::String;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::Error;

    impl Serialize for Error {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    /// Comes back as a [`Message`][crate::Message]; the original type is not recoverable.
    impl<'de> Deserialize<'de> for Error {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
            String::deserialize(deserializer).map(Error::msg)
        }
    }
}

#[cfg(test)]
mod test {
    use alloc::{string::String, vec, vec::Vec};

    use zeroize::Zeroize;

    use crate::fixtures::*;
    use crate::{Result, TypedResult};

    #[test]
    fn zeroize_value() {
        let mut result = Result::ok(vec![1u8, 2, 3]);
        result.zeroize();
        assert!(result.is_success());
        assert!(result.value().unwrap().is_empty());

        let mut result = Result::<Vec<u8>>::error(Invalid);
        result.zeroize();
        assert!(result.get_error().unwrap().is::<Invalid>());
    }

    #[test]
    fn zeroize_live_slot() {
        let mut result = TypedResult::<u32, u32>::ok(7);
        result.zeroize();
        assert_eq!(result.value(), Ok(&0));

        let mut result = TypedResult::<u32, String>::error("secret".into());
        result.zeroize();
        assert!(result.is_error());
        assert_eq!(result.get_error().map(String::as_str), Ok(""));
    }

    #[cfg(feature = "serde")]
    mod serialization {
        use alloc::string::String;

        use crate::{Message, Result, TypedResult, UnitResult};

        #[test]
        fn typed() {
            let result = TypedResult::<i32, String>::ok(10);
            let json = serde_json::to_string(&result).unwrap();
            assert_eq!(json, r#"{"Ok":10}"#);
            assert_eq!(serde_json::from_str::<TypedResult<i32, String>>(&json).unwrap(), result);

            let result = TypedResult::<i32, String>::error("Invalid".into());
            let json = serde_json::to_string(&result).unwrap();
            assert_eq!(json, r#"{"Err":"Invalid"}"#);
            assert_eq!(serde_json::from_str::<TypedResult<i32, String>>(&json).unwrap(), result);
        }

        #[test]
        fn generic_error_as_message() {
            let json = serde_json::to_string(&Result::<i32>::error_msg("Invalid")).unwrap();
            assert_eq!(json, r#"{"Err":"Invalid"}"#);

            let result: Result<i32> = serde_json::from_str(&json).unwrap();
            let error = result.get_error().unwrap();
            assert_eq!(error.message(), "Invalid");
            assert!(error.is::<Message>());

            let result: Result<i32> = serde_json::from_str(r#"{"Ok":10}"#).unwrap();
            assert_eq!(result.value(), Ok(&10));
        }

        #[test]
        fn unit() {
            assert_eq!(serde_json::to_string(&UnitResult::ok()).unwrap(), "null");
            assert_eq!(serde_json::to_string(&UnitResult::error_msg("Invalid")).unwrap(), r#""Invalid""#);

            let result: UnitResult = serde_json::from_str(r#""Invalid""#).unwrap();
            assert_eq!(result.to_string(), "Result(Invalid)");
        }
    }
}
