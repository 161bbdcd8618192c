//! Typed conversion between stored INI text and Rust values.
//!
//! Values are stored as raw text; coercion happens at read time, not at
//! storage time. The [`IniValue`] trait is the seam: `read` funnels stored
//! text through [`IniValue::from_ini`] and `write` renders values through
//! [`IniValue::to_ini`].

/// Textual spellings accepted as boolean `true`, matched case-insensitively.
///
/// Anything outside this set reads as `false` — unrecognized text is not an
/// error and does not fall back to the caller's default.
pub const TRUE_ALIASES: [&str; 4] = ["true", "on", "yes", "1"];

/// Canonical rendering of boolean `true` on write.
pub(crate) const TRUE_TOKEN: &str = "true";

/// Canonical rendering of boolean `false` on write.
pub(crate) const FALSE_TOKEN: &str = "false";

/// A value that can be read from and written to an INI file.
pub trait IniValue: Sized {
    /// Convert stored text into the value, `None` when the text does not
    /// parse (the accessor layer substitutes the caller's default).
    fn from_ini(raw: &str) -> Option<Self>;

    /// Render the value as INI text.
    fn to_ini(&self) -> String;
}

impl IniValue for String {
    fn from_ini(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn to_ini(&self) -> String {
        self.clone()
    }
}

impl IniValue for bool {
    /// Alias-set membership: `"YES"`, `"On"`, `"1"`, `"true"` are all
    /// `true`; everything else — including `"2"` and the empty string —
    /// is `false`, never a parse failure.
    fn from_ini(raw: &str) -> Option<Self> {
        let lowered = raw.to_ascii_lowercase();
        Some(TRUE_ALIASES.contains(&lowered.as_str()))
    }

    fn to_ini(&self) -> String {
        if *self { TRUE_TOKEN } else { FALSE_TOKEN }.to_string()
    }
}

macro_rules! ini_value_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IniValue for $ty {
                fn from_ini(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }

                fn to_ini(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

ini_value_via_from_str!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
