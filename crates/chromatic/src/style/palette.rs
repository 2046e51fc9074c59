//! Lookup tables behind the style table builder.
//!
//! These are the read-only name-to-RGB and name-to-code mappings consumed by
//! [`StyleTable`](super::StyleTable), along with the pieces every ANSI
//! template is made of.
//!
//! Color names are stored in capitalized form (`"Red"`, `"Aliceblue"`) and are
//! looked up through [`capitalize`]; the colors are the CSS named colors.

use super::color::Rgb;
use crate::util::capitalize;

/// Control sequence introducer opening every escape.
pub const TAG: &str = "\x1b[";

/// Reset sequence closing every escape.
pub const CLOSER: &str = "\x1b[0m";

/// Content placeholder inside a template.
pub const PLACEHOLDER: &str = "%s";

/// Parameter marker for 24-bit foreground colors.
pub const FOREGROUND: &str = "38;2";

/// Parameter marker for 24-bit background colors.
pub const BACKGROUND: &str = "48;2";

/// Colors included when the table is not built `complete`.
pub const BASE_COLORS: [&str; 7] = ["black", "blue", "cyan", "green", "red", "white", "yellow"];

/// Text modifiers and their SGR codes.
pub const MODIFIERS: &[(&str, u8)] = &[
    ("Bright", 1),
    ("Dim", 2),
    ("Underline", 4),
    ("Blink", 5),
    ("Reverse", 7),
    ("Hidden", 8),
];

/// Every known color, keyed by capitalized name.
pub const COLORS: &[(&str, Rgb)] = &[
    ("Aliceblue", Rgb(240, 248, 255)),
    ("Antiquewhite", Rgb(250, 235, 215)),
    ("Aqua", Rgb(0, 255, 255)),
    ("Aquamarine", Rgb(127, 255, 212)),
    ("Azure", Rgb(240, 255, 255)),
    ("Beige", Rgb(245, 245, 220)),
    ("Bisque", Rgb(255, 228, 196)),
    ("Black", Rgb(0, 0, 0)),
    ("Blanchedalmond", Rgb(255, 235, 205)),
    ("Blue", Rgb(0, 0, 255)),
    ("Blueviolet", Rgb(138, 43, 226)),
    ("Brown", Rgb(165, 42, 42)),
    ("Burlywood", Rgb(222, 184, 135)),
    ("Cadetblue", Rgb(95, 158, 160)),
    ("Chartreuse", Rgb(127, 255, 0)),
    ("Chocolate", Rgb(210, 105, 30)),
    ("Coral", Rgb(255, 127, 80)),
    ("Cornflowerblue", Rgb(100, 149, 237)),
    ("Cornsilk", Rgb(255, 248, 220)),
    ("Crimson", Rgb(220, 20, 60)),
    ("Cyan", Rgb(0, 255, 255)),
    ("Darkblue", Rgb(0, 0, 139)),
    ("Darkcyan", Rgb(0, 139, 139)),
    ("Darkgoldenrod", Rgb(184, 134, 11)),
    ("Darkgray", Rgb(169, 169, 169)),
    ("Darkgreen", Rgb(0, 100, 0)),
    ("Darkkhaki", Rgb(189, 183, 107)),
    ("Darkmagenta", Rgb(139, 0, 139)),
    ("Darkolivegreen", Rgb(85, 107, 47)),
    ("Darkorange", Rgb(255, 140, 0)),
    ("Darkorchid", Rgb(153, 50, 204)),
    ("Darkred", Rgb(139, 0, 0)),
    ("Darksalmon", Rgb(233, 150, 122)),
    ("Darkseagreen", Rgb(143, 188, 143)),
    ("Darkslateblue", Rgb(72, 61, 139)),
    ("Darkslategray", Rgb(47, 79, 79)),
    ("Darkturquoise", Rgb(0, 206, 209)),
    ("Darkviolet", Rgb(148, 0, 211)),
    ("Deeppink", Rgb(255, 20, 147)),
    ("Deepskyblue", Rgb(0, 191, 255)),
    ("Dimgray", Rgb(105, 105, 105)),
    ("Dodgerblue", Rgb(30, 144, 255)),
    ("Firebrick", Rgb(178, 34, 34)),
    ("Floralwhite", Rgb(255, 250, 240)),
    ("Forestgreen", Rgb(34, 139, 34)),
    ("Fuchsia", Rgb(255, 0, 255)),
    ("Gainsboro", Rgb(220, 220, 220)),
    ("Ghostwhite", Rgb(248, 248, 255)),
    ("Gold", Rgb(255, 215, 0)),
    ("Goldenrod", Rgb(218, 165, 32)),
    ("Gray", Rgb(128, 128, 128)),
    ("Green", Rgb(0, 128, 0)),
    ("Greenyellow", Rgb(173, 255, 47)),
    ("Honeydew", Rgb(240, 255, 240)),
    ("Hotpink", Rgb(255, 105, 180)),
    ("Indianred", Rgb(205, 92, 92)),
    ("Indigo", Rgb(75, 0, 130)),
    ("Ivory", Rgb(255, 255, 240)),
    ("Khaki", Rgb(240, 230, 140)),
    ("Lavender", Rgb(230, 230, 250)),
    ("Lavenderblush", Rgb(255, 240, 245)),
    ("Lawngreen", Rgb(124, 252, 0)),
    ("Lemonchiffon", Rgb(255, 250, 205)),
    ("Lightblue", Rgb(173, 216, 230)),
    ("Lightcoral", Rgb(240, 128, 128)),
    ("Lightcyan", Rgb(224, 255, 255)),
    ("Lightgoldenrodyellow", Rgb(250, 250, 210)),
    ("Lightgray", Rgb(211, 211, 211)),
    ("Lightgreen", Rgb(144, 238, 144)),
    ("Lightpink", Rgb(255, 182, 193)),
    ("Lightsalmon", Rgb(255, 160, 122)),
    ("Lightseagreen", Rgb(32, 178, 170)),
    ("Lightskyblue", Rgb(135, 206, 250)),
    ("Lightslategray", Rgb(119, 136, 153)),
    ("Lightsteelblue", Rgb(176, 196, 222)),
    ("Lightyellow", Rgb(255, 255, 224)),
    ("Lime", Rgb(0, 255, 0)),
    ("Limegreen", Rgb(50, 205, 50)),
    ("Linen", Rgb(250, 240, 230)),
    ("Magenta", Rgb(255, 0, 255)),
    ("Maroon", Rgb(128, 0, 0)),
    ("Mediumaquamarine", Rgb(102, 205, 170)),
    ("Mediumblue", Rgb(0, 0, 205)),
    ("Mediumorchid", Rgb(186, 85, 211)),
    ("Mediumpurple", Rgb(147, 112, 219)),
    ("Mediumseagreen", Rgb(60, 179, 113)),
    ("Mediumslateblue", Rgb(123, 104, 238)),
    ("Mediumspringgreen", Rgb(0, 250, 154)),
    ("Mediumturquoise", Rgb(72, 209, 204)),
    ("Mediumvioletred", Rgb(199, 21, 133)),
    ("Midnightblue", Rgb(25, 25, 112)),
    ("Mintcream", Rgb(245, 255, 250)),
    ("Mistyrose", Rgb(255, 228, 225)),
    ("Moccasin", Rgb(255, 228, 181)),
    ("Navajowhite", Rgb(255, 222, 173)),
    ("Navy", Rgb(0, 0, 128)),
    ("Oldlace", Rgb(253, 245, 230)),
    ("Olive", Rgb(128, 128, 0)),
    ("Olivedrab", Rgb(107, 142, 35)),
    ("Orange", Rgb(255, 165, 0)),
    ("Orangered", Rgb(255, 69, 0)),
    ("Orchid", Rgb(218, 112, 214)),
    ("Palegoldenrod", Rgb(238, 232, 170)),
    ("Palegreen", Rgb(152, 251, 152)),
    ("Paleturquoise", Rgb(175, 238, 238)),
    ("Palevioletred", Rgb(219, 112, 147)),
    ("Papayawhip", Rgb(255, 239, 213)),
    ("Peachpuff", Rgb(255, 218, 185)),
    ("Peru", Rgb(205, 133, 63)),
    ("Pink", Rgb(255, 192, 203)),
    ("Plum", Rgb(221, 160, 221)),
    ("Powderblue", Rgb(176, 224, 230)),
    ("Purple", Rgb(128, 0, 128)),
    ("Rebeccapurple", Rgb(102, 51, 153)),
    ("Red", Rgb(255, 0, 0)),
    ("Rosybrown", Rgb(188, 143, 143)),
    ("Royalblue", Rgb(65, 105, 225)),
    ("Saddlebrown", Rgb(139, 69, 19)),
    ("Salmon", Rgb(250, 128, 114)),
    ("Sandybrown", Rgb(244, 164, 96)),
    ("Seagreen", Rgb(46, 139, 87)),
    ("Seashell", Rgb(255, 245, 238)),
    ("Sienna", Rgb(160, 82, 45)),
    ("Silver", Rgb(192, 192, 192)),
    ("Skyblue", Rgb(135, 206, 235)),
    ("Slateblue", Rgb(106, 90, 205)),
    ("Slategray", Rgb(112, 128, 144)),
    ("Snow", Rgb(255, 250, 250)),
    ("Springgreen", Rgb(0, 255, 127)),
    ("Steelblue", Rgb(70, 130, 180)),
    ("Tan", Rgb(210, 180, 140)),
    ("Teal", Rgb(0, 128, 128)),
    ("Thistle", Rgb(216, 191, 216)),
    ("Tomato", Rgb(255, 99, 71)),
    ("Turquoise", Rgb(64, 224, 208)),
    ("Violet", Rgb(238, 130, 238)),
    ("Wheat", Rgb(245, 222, 179)),
    ("White", Rgb(255, 255, 255)),
    ("Whitesmoke", Rgb(245, 245, 245)),
    ("Yellow", Rgb(255, 255, 0)),
    ("Yellowgreen", Rgb(154, 205, 50)),
];

/// Looks up a known color, ignoring the case of `name`.
///
/// Returns the table's own key along with the color.
pub fn find_color(name: &str) -> Option<(&'static str, Rgb)> {
    let key = capitalize(&name.to_lowercase());
    COLORS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|&(known, rgb)| (known, rgb))
}
