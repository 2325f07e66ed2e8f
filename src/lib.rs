//! # Rainbow Poll Bot
//!
//! A Telegram bot that asks a group chat "who wants to play rainbow?" and tallies the answers.
//!
//! ## Features
//! - One poll per chat, started by a fixed phrase
//! - Yes / No / Later answers, one per participant
//! - Results posted once three people have answered
//! - Organizer cancellation and optional expiry of polls open longer than a set number of minutes
//! - English and Russian command vocabularies
//! - HTTP liveness endpoint for the hosting platform

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Error types shared across the crate
pub mod error;
/// In-memory poll state
pub mod poll;
/// Background services: health endpoint and poll expiry
pub mod services;
/// Utility functions for formatting and logging
pub mod utils;
