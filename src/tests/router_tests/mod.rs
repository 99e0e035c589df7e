mod listing_tests;
mod loading_tests;
mod remote_load_tests;
