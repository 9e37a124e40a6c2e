//! Integration test suite entry point.

mod pipeline_test;
mod provider_fallback_test;
