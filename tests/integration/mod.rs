//! Integration test harness for the relnotes binary

mod helpers;
mod test_extract;
mod test_notify;
