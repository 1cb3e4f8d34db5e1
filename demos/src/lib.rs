//! Seed end-to-end scenarios and the grammar round-trip property, exercised as
//! integration tests against the `syntagma` crate. No library surface of its own.
