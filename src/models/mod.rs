pub mod category;
pub mod web;
