/// Which shift state of the physical keyboard produces a key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ShiftLayer {
    Unshifted,
    Shifted,
}

impl ShiftLayer {
    pub const ALL: [ShiftLayer; 2] = [ShiftLayer::Unshifted, ShiftLayer::Shifted];
}

/// Key that turns the preceding kana into its voiced form (dakuten).
pub const VOICED_MARK_KEY: char = '@';

/// Key that turns the preceding h-row kana into its semi-voiced form (handakuten).
pub const SEMI_VOICED_MARK_KEY: char = '[';

// Modified OADG 109 kana layout, as seen through a US-style key decoder.
//
// Keys must be unique across both layers.
pub const OADG_109_UNSHIFTED: &[(char, &str)] = &[
    // number row
    ('1', "ぬ"),
    ('2', "ふ"),
    ('3', "あ"),
    ('4', "う"),
    ('5', "え"),
    ('6', "お"),
    ('7', "や"),
    ('8', "ゆ"),
    ('9', "よ"),
    ('0', "わ"),
    ('-', "ほ"),
    ('^', "へ"),
    ('|', "ー"),
    // top row
    ('q', "た"),
    ('w', "て"),
    ('e', "い"),
    ('r', "す"),
    ('t', "か"),
    ('y', "ん"),
    ('u', "な"),
    ('i', "に"),
    ('o', "ら"),
    ('p', "せ"),
    ('@', "゛"),
    ('[', "゜"),
    // home row
    ('a', "ち"),
    ('s', "と"),
    ('d', "し"),
    ('f', "は"),
    ('g', "き"),
    ('h', "く"),
    ('j', "ま"),
    ('k', "の"),
    ('l', "り"),
    (';', "れ"),
    (':', "け"),
    (']', "む"),
    // bottom row
    ('z', "つ"),
    ('x', "さ"),
    ('c', "そ"),
    ('v', "ひ"),
    ('b', "こ"),
    ('n', "み"),
    ('m', "も"),
    (',', "ね"),
    ('.', "る"),
    ('/', "め"),
    ('\\', "ろ"),
];

pub const OADG_109_SHIFTED: &[(char, &str)] = &[
    // small kana
    ('#', "ぁ"),
    ('$', "ぅ"),
    ('%', "ぇ"),
    ('&', "ぉ"),
    ('\'', "ゃ"),
    ('(', "ゅ"),
    (')', "ょ"),
    ('~', "を"),
    ('E', "ぃ"),
    ('Z', "っ"),
    // brackets and punctuation
    ('P', "『"),
    ('{', "「"),
    ('+', "』"),
    ('*', "ヶ"),
    ('}', "」"),
    ('<', "、"),
    ('>', "。"),
    ('?', "・"),
    (' ', "　"),
];

/// Returns the built-in table for the given shift layer.
#[must_use]
pub const fn oadg_109_layer(layer: ShiftLayer) -> &'static [(char, &'static str)] {
    match layer {
        ShiftLayer::Unshifted => OADG_109_UNSHIFTED,
        ShiftLayer::Shifted => OADG_109_SHIFTED,
    }
}
