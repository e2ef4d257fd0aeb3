mod client_tests;
mod retry_tests;
