/*!
The luby sequence, as an iterator.

See <https://oeis.org/A182105> for details on the luby sequence.

Elements are computed directly from their index by finding the smallest complete subsequence containing the index, following the approach taken by MiniSat.
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u32;

/// The element of the luby sequence at `index`, counting from zero.
///
/// Returns None if the element is not representable.
pub fn luby(index: u64) -> Option<LubyRepresentation> {
    let mut size: u64 = 1;
    let mut exponent: u32 = 0;

    while size < index.checked_add(1)? {
        exponent += 1;
        size = size.checked_mul(2)?.checked_add(1)?;
    }

    let mut index = index;
    while size - 1 != index {
        size = (size - 1) >> 1;
        exponent -= 1;
        index %= size;
    }

    LubyRepresentation::checked_pow(2, exponent)
}

/// An iterator over the luby sequence.
#[derive(Default)]
pub struct Luby {
    index: u64,
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        let element = luby(self.index)?;
        self.index += 1;
        Some(element)
    }
}

impl Luby {
    /// The count of elements taken from the sequence.
    pub fn taken(&self) -> u64 {
        self.index
    }
}
