//! Input alphabet and the Konami sequence recognizer.
//!
//! Both the keyboard listener and the on-screen control handlers feed the
//! same six-symbol alphabet into a sliding-window recognizer. The
//! recognizer is purely observational: it shares physical key events with
//! the navigator but keeps its own buffer and never blocks navigation.

use crossterm::event::{KeyCode, KeyEvent};

/// A canonical input symbol: the four D-pad directions plus the two
/// action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// D-pad up.
    Up,
    /// D-pad down.
    Down,
    /// D-pad left.
    Left,
    /// D-pad right.
    Right,
    /// B button.
    B,
    /// A button.
    A,
}

impl Symbol {
    /// Normalizes a keyboard event into the input alphabet.
    ///
    /// Arrow keys pass through as-is; `b`/`a` are case-folded to the
    /// action symbols; every other key is outside the alphabet.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'b' => Some(Self::B),
                'a' => Some(Self::A),
                _ => None,
            },
            _ => None,
        }
    }
}

/// The Konami code: Up Up Down Down Left Right Left Right B A.
pub const KONAMI_SEQUENCE: &[Symbol] = &[
    Symbol::Up,
    Symbol::Up,
    Symbol::Down,
    Symbol::Down,
    Symbol::Left,
    Symbol::Right,
    Symbol::Left,
    Symbol::Right,
    Symbol::B,
    Symbol::A,
];

/// Watches a live input stream for a fixed target sequence.
///
/// Keeps a window of the most recent `target.len()` symbols and compares
/// it element-wise after every feed. There is no timeout, so a user can
/// pause mid-sequence indefinitely; there is also no overlap detection,
/// so after a match the full sequence must be re-entered from scratch.
#[derive(Debug)]
pub struct SequenceRecognizer {
    target: &'static [Symbol],
    buffer: Vec<Symbol>,
}

impl SequenceRecognizer {
    /// Creates a recognizer for the Konami code.
    #[must_use]
    pub fn konami() -> Self {
        Self::new(KONAMI_SEQUENCE)
    }

    /// Creates a recognizer for an arbitrary target sequence.
    #[must_use]
    pub fn new(target: &'static [Symbol]) -> Self {
        Self {
            target,
            buffer: Vec::with_capacity(target.len()),
        }
    }

    /// Feeds one symbol; returns `true` exactly when the window now
    /// matches the target. On a match the buffer is cleared so the next
    /// match requires the full sequence again.
    pub fn feed(&mut self, symbol: Symbol) -> bool {
        self.buffer.push(symbol);
        if self.buffer.len() > self.target.len() {
            self.buffer.remove(0);
        }
        if self.buffer == self.target {
            self.buffer.clear();
            true
        } else {
            false
        }
    }

    /// Number of symbols currently buffered (at most the target length).
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_pass_through() {
        assert_eq!(Symbol::from_key_event(key(KeyCode::Up)), Some(Symbol::Up));
        assert_eq!(
            Symbol::from_key_event(key(KeyCode::Down)),
            Some(Symbol::Down)
        );
        assert_eq!(
            Symbol::from_key_event(key(KeyCode::Left)),
            Some(Symbol::Left)
        );
        assert_eq!(
            Symbol::from_key_event(key(KeyCode::Right)),
            Some(Symbol::Right)
        );
    }

    #[test]
    fn test_action_keys_case_folded() {
        assert_eq!(
            Symbol::from_key_event(key(KeyCode::Char('b'))),
            Some(Symbol::B)
        );
        assert_eq!(
            Symbol::from_key_event(key(KeyCode::Char('B'))),
            Some(Symbol::B)
        );
        assert_eq!(
            Symbol::from_key_event(key(KeyCode::Char('a'))),
            Some(Symbol::A)
        );
        assert_eq!(
            Symbol::from_key_event(key(KeyCode::Char('A'))),
            Some(Symbol::A)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(Symbol::from_key_event(key(KeyCode::Char('x'))), None);
        assert_eq!(Symbol::from_key_event(key(KeyCode::Enter)), None);
        assert_eq!(Symbol::from_key_event(key(KeyCode::Esc)), None);
    }

    #[test]
    fn test_exact_sequence_fires_once_and_resets() {
        let mut rec = SequenceRecognizer::konami();
        let mut fired = 0;
        for &s in KONAMI_SEQUENCE {
            if rec.feed(s) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(rec.buffered(), 0);
    }

    #[test]
    fn test_proper_subsequence_never_fires() {
        let mut rec = SequenceRecognizer::konami();
        for &s in &KONAMI_SEQUENCE[..KONAMI_SEQUENCE.len() - 1] {
            assert!(!rec.feed(s));
        }
    }

    #[test]
    fn test_single_substitution_never_fires() {
        // Replace the final A with B.
        let mut rec = SequenceRecognizer::konami();
        for &s in &KONAMI_SEQUENCE[..KONAMI_SEQUENCE.len() - 1] {
            assert!(!rec.feed(s));
        }
        assert!(!rec.feed(Symbol::B));
    }

    #[test]
    fn test_sequence_twice_fires_twice() {
        let mut rec = SequenceRecognizer::konami();
        let mut fired = 0;
        for _ in 0..2 {
            for &s in KONAMI_SEQUENCE {
                if rec.feed(s) {
                    fired += 1;
                }
            }
        }
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_buffer_never_exceeds_target_length() {
        let mut rec = SequenceRecognizer::konami();
        for _ in 0..100 {
            rec.feed(Symbol::Left);
            assert!(rec.buffered() <= KONAMI_SEQUENCE.len());
        }
    }

    #[test]
    fn test_noise_then_sequence_still_fires() {
        // The window slides, so leading junk is evicted.
        let mut rec = SequenceRecognizer::konami();
        for _ in 0..7 {
            assert!(!rec.feed(Symbol::A));
        }
        let mut fired = 0;
        for &s in KONAMI_SEQUENCE {
            if rec.feed(s) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }
}
