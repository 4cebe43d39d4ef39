//! Unit and service tests for user identity management.

mod domain_tests;
