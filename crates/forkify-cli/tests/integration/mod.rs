mod race_tests;
mod shell_tests;
