pub mod email;
pub mod reminder;
