pub mod habit;
