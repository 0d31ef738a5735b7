mod application;
mod test_error;
