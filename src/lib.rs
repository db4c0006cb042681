// lib.rs - Library root for cmdpad

pub mod action;
pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod history;
pub mod prompt;
pub mod server;
