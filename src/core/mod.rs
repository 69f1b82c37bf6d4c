//! Key extraction and status classification.
//!
//! ## Module Structure
//!
//! - `scan`: walk a source tree and match translation-key usages line by line
//! - `normalize`: split raw keys into namespace and key
//! - `extract`: clear-then-repopulate extraction run against an `ExtractionStore`
//! - `status`: pure status classifier
//! - `overview`: grouped editor views built from the stores
//! - `utils`: glob matching for source file selection

pub mod extract;
pub mod normalize;
pub mod overview;
pub mod scan;
pub mod status;
pub mod utils;

pub use extract::{ExtractionSummary, run_extraction};
pub use normalize::{DEFAULT_NAMESPACE, KeyRef, normalize_key};
pub use overview::{
    ExtractedKeyView, KeyEntry, LanguageOverview, NamespaceGroup, StatusCounts, build_overview,
    extracted_with_reference, load_overview,
};
pub use scan::{KeyPatterns, RawMatch, Scanner};
pub use status::{LanguageRole, Status, StatusInput, classify};
