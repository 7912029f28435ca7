//! TemplateFinder - locate files inside template directory trees
//!
//! Walks a set of root directories and collects the files that live under a
//! "template" directory: any directory whose name contains `templates` or
//! `items` (case-insensitive), together with everything nested below it.
//! Only `.cs` and `.zip` files are collected, and each is reported with its
//! root's absolute path stripped from the front.
//!
//! # Example
//!
//! ```ignore
//! use templatefinder::TemplateFileCollector;
//!
//! let collector = TemplateFileCollector::default();
//! let files = collector.collect(&["/opt/vs/Common7/IDE", "/home/dev/Templates"]);
//! // ["/ItemTemplates/CSharp/Class/Class.cs", "/ProjectTemplates/WebApp.zip", ...]
//! ```

pub mod cli;
mod collector;
pub mod config;
mod error;

pub use collector::{
    DEFAULT_EXTENSIONS, DEFAULT_MARKERS, MatchRules, ScanReport, TemplateFile, TemplateFileCollector, collect,
};
pub use error::ScanError;
