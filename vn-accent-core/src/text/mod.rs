//! Text-level helpers that surround prediction.
//!
//! - Accent stripping (`AccentTable`)
//! - Segmentation into word-like and symbol-like runs (`tokenize`)
//! - Case recording and restoration (`CaseMask`)

/// Accented-character to base-character table.
pub mod accent_table;

/// Word / symbol run segmentation.
pub mod tokenizer;

/// Per-character case mask.
pub mod case;
