mod factory_tests;
mod header_tests;
