// src/lib.rs

//! TechBlog Engine Library

pub mod controller;
pub mod engine;
pub mod error;
pub mod format;
pub mod models;
pub mod present;
pub mod render;
pub mod services;
pub mod utils;
