use std::ffi::OsStr;

use crate::types::CharCount;

/// Counts the code units of `text` in the platform's native string encoding.
///
/// For valid UTF-8 this is the byte length (`str::len`), so an accented
/// letter such as `é` counts 2 and most emoji count 4. Grapheme clusters are
/// not taken into account. Arguments that are not valid UTF-8 are counted
/// byte for byte.
pub fn count<S: AsRef<OsStr> + ?Sized>(text: &S) -> usize {
    text.as_ref().as_encoded_bytes().len()
}

/// Same as [`count`], wrapped in [`CharCount`].
pub fn measure<S: AsRef<OsStr> + ?Sized>(text: &S) -> CharCount {
    count(text).into()
}
