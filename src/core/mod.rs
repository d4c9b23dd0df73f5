// src/core/mod.rs

pub mod dates;
pub mod html;
pub mod net;
pub mod sanitize;
pub mod xls;
