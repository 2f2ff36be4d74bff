#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let limits = wire::Limits::for_testing();

    if let Ok(link) = codec::decode_token(text, &limits) {
        // Accepted tokens are canonical.
        let token = codec::encode_token(&link).unwrap();
        assert_eq!(token, text);
    }

    for found in codec::find_links_with_limits(text, &limits) {
        assert_eq!(&text[found.range.clone()], found.token);
    }
});
