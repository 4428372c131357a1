pub mod apply;
pub mod basic;
pub mod extract;
pub mod smart;
