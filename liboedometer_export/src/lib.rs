//! # oedometer_export
//!
//! oedometer_export converts the readings logged by a one dimensional consolidation
//! (oedometer) apparatus into a KeyLAB schedule. Each logger file holds the gauge
//! readings of one load stage; a set of files is combined into a single XML document
//! with one stage per file, ready to be imported into KeyLAB.
//!
//! ## Installation
//!
//! The only method of install is from source. If you have not used Rust before, you
//! will most likely need to install the Rust tool chain. See the
//! [Rust docs](https://www.rust-lang.org/tools/install) for installation instructions.
//!
//! To build and install the CLI use `cargo install --path ./oedometer_export_cli` from
//! the top level repository. To use the CLI see the `oedometer_export_cli` README.
//!
//! ## Configuration
//!
//! Exports are described by a YAML configuration file. The template made by
//! `oedometer_export_cli -p config.yaml new` looks like:
//!
//! ```yml
//! input_paths: []
//! output_path: null
//! ```
//!
//! `input_paths` lists the logger files in stage order: the first file becomes stage 1,
//! the second stage 2 and so on, regardless of the file names. `output_path` is the XML
//! file to write; its directory must exist.
//!
//! ## Input Format
//!
//! Logger files are plain text with no delimiters, header, or footer. Every 17
//! characters form one record:
//!
//! ```text
//! offset  0..3   unused
//! offset  3..9   gauge (dive) reading
//! offset  9..14  hours
//! offset 14..16  minutes
//! offset 16..17  tenths of a minute
//! ```
//!
//! Leftover characters at the end of a file that do not make a full record (typically
//! a trailing newline) are ignored.
//!
//! ## Output
//!
//! The schedule has the following structure:
//!
//! ```text
//! keylab - xmlns, content, timestamp
//! |---- test-definitions
//! |    |---- test-definition (OEDOISO) - name, code
//! |---- project (Unknown)
//! |    |---- samples
//! |    |    |---- sample (Unknown)
//! |    |    |    |---- test - code, specimen
//! |    |    |    |    |---- stages
//! |    |    |    |    |    |---- stage - number
//! |    |    |    |    |    |    |---- parameters
//! |    |    |    |    |    |    |    |---- parameter - name, value
//! ```
//!
//! Within a stage all of the gauge readings come first
//! (`Stage_StageReadings_StagePasteDive1`), followed by all of the elapsed times in
//! minutes (`Stage_StageReadings_StagePasteMins1`), each in record order.
pub mod config;
pub mod constants;
pub mod error;
pub mod parser;
pub mod process;
pub mod record;
pub mod rounding;
pub mod schedule;
pub mod status;
pub mod summary;
