pub mod comments;
pub mod complaints;
pub mod department;
pub mod error;
pub mod identity;
pub mod navigation;
pub mod notice;
pub mod pages;
pub mod ports;
pub mod seed;
pub mod stories;
pub mod util;
pub mod wizard;

pub type DomainResult<T> = Result<T, error::DomainError>;
