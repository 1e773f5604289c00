mod cli_tests;
mod render_tests;
mod support;
