// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These cover the pure pieces: value conversions and the derivation
//! functions, which must hold for arbitrary inputs.

use corecfg::domain::ConfigValue;
use corecfg::service::derived::{join_endpoint, strip_scheme};
use proptest::prelude::*;

// An input without the separator always passes through unchanged.
proptest! {
    #[test]
    fn test_strip_scheme_without_separator_is_identity(s in "[^:/]*") {
        prop_assert_eq!(strip_scheme(&s), s.as_str());
    }
}

// With a scheme prefix, exactly the remainder after the first separator
// comes back.
proptest! {
    #[test]
    fn test_strip_scheme_removes_leading_scheme(
        scheme in "[a-z]{1,8}",
        rest in "[a-z0-9.:-]*"
    ) {
        let endpoint = format!("{}://{}", scheme, rest);
        prop_assert_eq!(strip_scheme(&endpoint), rest.as_str());
    }
}

// Joining always ends with the suffix and never doubles the slash at the
// seam.
proptest! {
    #[test]
    fn test_join_endpoint_seam(base in "http://[a-z]{1,12}(:[0-9]{1,5})?/{0,3}") {
        let joined = join_endpoint(&base, "/service/token");
        prop_assert!(joined.ends_with("/service/token"));
        let seam = &joined[..joined.len() - "/service/token".len()];
        prop_assert!(!seam.ends_with('/'));
    }
}

// Integer conversion parses exactly the values i64 round-trips.
proptest! {
    #[test]
    fn test_as_i64_roundtrip(n in prop::num::i64::ANY) {
        let value = ConfigValue::from(n.to_string());
        prop_assert_eq!(value.as_i64("probe").unwrap(), n);
    }
}

// A conversion failure reports the key it happened on.
proptest! {
    #[test]
    fn test_conversion_error_carries_key(s in "[a-z]{1,10}", key in "[a-z_]{1,20}") {
        let value = ConfigValue::from(s);
        if let Err(e) = value.as_i64(&key) {
            prop_assert!(e.to_string().contains(&key));
        }
    }
}
