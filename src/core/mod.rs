pub mod enumerate;
pub mod error;
pub mod identity;
pub mod map;
pub mod rebuild;
pub mod update;
