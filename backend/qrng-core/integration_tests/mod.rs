// Public API tests for qrng-core
// These exercise the crate from an external consumer's perspective, with
// the remote API replaced by wiremock.

mod generator {
    mod pipeline;
}

mod qrng {
    mod fetch;
}
