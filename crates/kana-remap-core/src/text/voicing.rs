//! Dakuten/handakuten composition by code-point arithmetic.
//!
//! The hiragana block lays voiced forms out directly after their base
//! (か/が, き/ぎ, ...), so composing a mark is a +1 (voiced) or +2
//! (semi-voiced, h-row only) offset once the base has been recognized.

const KA: u32 = 0x304b;
const DI: u32 = 0x3062;
const TU: u32 = 0x3064;
const DO: u32 = 0x3069;
const HA: u32 = 0x306f;
const PO: u32 = 0x307d;
const U: u32 = 0x3046;
const VU: u32 = 0x3094;
const ITERATION_MARK: u32 = 0x309d;

// h-row bases sit every third code point starting at は.
const fn is_h_row_base(code: u32) -> bool {
    HA <= code && code <= PO && (code - (HA - 1)) % 3 == 1
}

/// Returns the voiced (dakuten) form of `ch`.
///
/// Already-voiced kana inside the k/s/t/h rows come back unchanged, so a mark
/// typed after them is absorbed. Characters outside those rows, う and ゝ have
/// no voiced form.
#[must_use]
pub const fn add_voiced_mark(ch: char) -> Option<char> {
    let code = ch as u32;
    let voiced = match code {
        KA..=DI if code % 2 == 1 => code + 1,
        TU..=DO if code % 2 == 0 => code + 1,
        HA..=PO if is_h_row_base(code) => code + 1,
        KA..=DI | TU..=DO | HA..=PO => code,
        U => VU,
        ITERATION_MARK => code + 1,
        _ => return None,
    };
    char::from_u32(voiced)
}

/// Returns the semi-voiced (handakuten) form of `ch`. Only は, ひ, ふ, へ
/// and ほ compose; the other h-row forms come back unchanged.
#[must_use]
pub const fn add_semi_voiced_mark(ch: char) -> Option<char> {
    let code = ch as u32;
    let semi = match code {
        HA..=PO if is_h_row_base(code) => code + 2,
        HA..=PO => code,
        _ => return None,
    };
    char::from_u32(semi)
}
