pub mod business;
pub mod cache;
pub mod history;
pub mod service;
pub mod statistics;
pub mod validation;
