//! Integration tests for the calculator library
//!
//! Tests are organized by topic:
//! - `properties` - Cross-calculator identities and worked examples
//! - `validation` - Batch failure reporting across calculators
//! - `reports` - Report labels, ordering, and value formatting
