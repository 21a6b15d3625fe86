//! Terminal presentation for the rangecut CLI: themes, message printing,
//! removal summaries and the diff view.

pub mod diff_viewer;
pub mod output_format;
pub mod removal_summary;
pub mod theme;
