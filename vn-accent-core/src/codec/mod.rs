//! Character alphabet and fixed-width one-hot codec.

/// Ordered character set and the pad sentinel.
pub mod alphabet;

/// Encoding of strings into `maxlen` x `|alphabet|` one-hot matrices and back.
pub mod alphabet_codec;
