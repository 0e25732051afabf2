pub mod file;
pub mod locale;
pub mod stdin;
