//! Route handlers, one module per page/endpoint group.

pub mod pages;
pub mod predict;
pub mod symptoms;
