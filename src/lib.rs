pub mod catalog;
pub mod models;
pub mod services;
pub mod web;
