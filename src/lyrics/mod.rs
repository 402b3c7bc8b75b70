//! Lyric handling: LRC timing parsing and word-level attempt scoring.

/// LRC timestamp parsing, formatting, and timing adjustment.
pub mod lrc;
/// Word tokenization and attempt scoring against hidden lyric lines.
pub mod scoring;
