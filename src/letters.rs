use std::fmt;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u32 = 26;

/// One bit per letter as bitset, bit 0 is `a`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);
    pub const FULL: LetterSet = LetterSet((1 << ALPHABET_LEN) - 1);

    /// Builds a set from raw bits. Bits above the alphabet are dropped.
    pub fn from_bits(bits: u32) -> Self {
        LetterSet(bits & Self::FULL.0)
    }

    /// The set holding a single lowercase ASCII letter.
    pub fn letter(c: u8) -> Self {
        let letter_idx = c as i32 - b'a' as i32;
        assert!(
            (0..ALPHABET_LEN as i32).contains(&letter_idx),
            "not a lowercase letter: {:?}",
            c as char
        );
        LetterSet(1 << letter_idx)
    }

    pub fn union(self, other: LetterSet) -> Self {
        LetterSet(self.0 | other.0)
    }

    pub fn contains(self, c: u8) -> bool {
        self.0 & Self::letter(c).0 != 0
    }

    pub fn contains_any(self, other: LetterSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_disjoint(self, other: LetterSet) -> bool {
        self.0 & other.0 == 0
    }

    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_full(self) -> bool {
        self == Self::FULL
    }

    /// Iterates the letters in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_LEN)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| (b'a' + i as u8) as char)
    }
}

impl std::ops::BitOr for LetterSet {
    type Output = LetterSet;

    fn bitor(self, rhs: LetterSet) -> LetterSet {
        self.union(rhs)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet({self})")
    }
}
