// src/lib.rs

pub mod config;
pub mod controllers;
pub mod models;
pub mod render;
pub mod utilities;
pub mod views;
