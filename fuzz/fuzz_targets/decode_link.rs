#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(link) = codec::decode_link(data) {
        let bytes = codec::encode_link(&link).unwrap();
        assert_eq!(bytes.as_slice(), data);
    }
});
