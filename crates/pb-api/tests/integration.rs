//! Single integration test binary; modules live alongside.

mod common;
mod db_tests;
mod router_tests;
