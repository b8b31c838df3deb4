/*!
Provides convenience routines for escaping raw bytes in error messages.
*/

/// Renders a single byte for use in an error message.
///
/// Printable ASCII is written as is. Everything else, including bytes that
/// start a multi-byte UTF-8 sequence, is written as an escape sequence like
/// `\n` or `\xE2`.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0 == b' ' {
            return f.write_str(" ");
        }
        for (i, b) in core::ascii::escape_default(self.0).enumerate() {
            // capitalize \xab to \xAB
            let b = if i >= 2 { b.to_ascii_uppercase() } else { b };
            core::fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("\"")?;
        core::fmt::Display::fmt(self, f)?;
        f.write_str("\"")
    }
}
