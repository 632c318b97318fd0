//! Consumers of the segmenter: frequency tables and reports

mod frequency;
mod report;

pub use frequency::{SyllableFrequency, Tally};
pub use report::{
    AnalysisReport, Analyzer, CharLengthBucket, RankedItem, WordExtent, WordLengthBucket,
};
