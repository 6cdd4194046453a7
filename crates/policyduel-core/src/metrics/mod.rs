//! Individual quality metrics.
//!
//! Each metric answers one question about a model response and knows nothing
//! about the others. Bracket integrity works on raw text; the remaining three
//! work on the parsed document or the trimmed raw text and are only consulted
//! after extraction succeeds.

pub mod brackets;
pub mod formatting;
pub mod rule_quality;
pub mod schema;

pub use brackets::bracket_integrity_score;
pub use formatting::formatting_quality;
pub use rule_quality::policy_rule_quality;
pub use schema::schema_completeness;
