pub mod api_key;
pub mod security;
pub mod validation;
