pub mod crtsh;
pub mod encyclopedia;
