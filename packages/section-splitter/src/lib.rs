//! Section Splitter - Split a delimited text report into per-section files.
//!
//! A report is divided into sections by markers: a line of five or more
//! `=` characters, a title line, and another `=` line. Each section is
//! written to its own numbered file named after its title.
//!
//! # Example
//!
//! ```
//! use section_splitter::{config, split_sections};
//!
//! let sections = split_sections("=====\nIntro\n=====\nHello world.\n");
//! assert_eq!(sections[0].file_name(1), "01_Intro.txt");
//! assert_eq!(config::sanitize_title("Findings & Risks!"), "Findings_Risks");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and the title sanitizer
//! - [`types`]: Core data types (Section, SplitReport)
//! - [`error`]: Error types and Result alias
//! - [`input`]: Input loading and UTF-8 decoding
//! - [`splitting`]: Marker detection and section splitting
//! - [`writer`]: Section file output
//! - [`cli`]: Command-line interface
//! - [`splitter`]: End-to-end splitter service

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod splitter;
pub mod splitting;
pub mod types;
pub mod writer;

// Re-export main functions
pub use splitter::{split_file, split_file_with};
pub use splitting::split_sections;

// Re-export commonly used items
pub use config::sanitize_title;
pub use error::{Result, SplitterError};
pub use types::{Section, SplitReport};
