// src/lib.rs

//! College Library Portal

pub mod error;
pub mod models;
pub mod pages;
pub mod parser;
pub mod search;
pub mod services;
pub mod utils;
