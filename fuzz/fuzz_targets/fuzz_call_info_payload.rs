//! Fuzz target: extraction of `CallInfo` from provider JSON.
//!
//! Any JSON value the provider might send must map to a `CallInfo` without
//! panicking; `raw` is kept exactly when the payload is an object.

#![no_main]

use callbridge_core::CallInfo;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let is_object = value.is_object();
        let info = CallInfo::from_payload(value);
        assert_eq!(info.raw.is_some(), is_object);
    }
});
