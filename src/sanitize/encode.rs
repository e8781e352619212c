// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Percent-encoding of file names.
//!
//! Bytes outside the unreserved set (ASCII letters, digits and `_.-~`) are
//! written as `%XX` with uppercase hex, unless the caller marks them safe.
//! Multi-byte UTF-8 characters are encoded byte by byte.
//!
//! An existing `%XX` escape is copied through untouched, so encoding a name
//! that was already encoded gives the same name back.

/// Percent-encodes `name`, leaving ASCII characters listed in `safe` as-is.
///
/// # Examples
///
/// ```
/// use autograph_tools::sanitize::percent_encode;
///
/// assert_eq!(percent_encode("file,2.xyz", "()=[]"), "file%2C2.xyz");
/// assert_eq!(percent_encode("a (1).xyz", "()=[]"), "a%20(1).xyz");
/// ```
pub fn percent_encode(name: &str, safe: &str) -> String {
    let bytes = name.as_bytes();
    let mut out = String::with_capacity(name.len());

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];

        if b == b'%' && is_escape(&bytes[i..]) {
            out.push_str(&name[i..i + 3]);
            i += 3;
            continue;
        }

        if is_unreserved(b) || (b.is_ascii() && safe.contains(b as char)) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }

        i += 1;
    }

    out
}

/// Returns `true` if encoding `name` would leave it unchanged.
pub fn is_encoded(name: &str, safe: &str) -> bool {
    percent_encode(name, safe) == name
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-' | b'~')
}

fn is_escape(rest: &[u8]) -> bool {
    rest.len() >= 3 && rest[1].is_ascii_hexdigit() && rest[2].is_ascii_hexdigit()
}
