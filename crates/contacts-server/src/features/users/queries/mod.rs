pub mod get_current;
