/*
    Integration tests for core_store subsystem

    Test suite covering:
    - Identity lifecycle (signup, login, logout, seeding)
    - Post mutations and authorization
    - Feed query filtering and ordering
    - Blob persistence, corruption fallback, reopen behavior
*/

pub mod persistence_tests;
pub mod query_tests;
