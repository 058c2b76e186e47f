/// Storage primitive tests against a live database
pub mod record_tests;
