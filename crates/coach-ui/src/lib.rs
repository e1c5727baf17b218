pub mod keys;
pub mod panels;
pub mod theme;
