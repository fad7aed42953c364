//! Unit tests for the board bounded context.

mod store_tests;
