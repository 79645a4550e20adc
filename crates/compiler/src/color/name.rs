use phf::phf_map;

/// CSS color keywords by packed `0xRRGGBB` value, used when emitting a color
/// whose channels exactly match a keyword.
///
/// Where the CSS spec defines two spellings for one value (`aqua`/`cyan`,
/// `fuchsia`/`magenta`, the `gray`/`grey` family), a single spelling is kept
/// so emission stays deterministic.
pub(crate) static COLOR_NAMES: phf::Map<u32, &'static str> = phf_map! {
    0xF0F8FFu32 => "aliceblue",
    0xFAEBD7u32 => "antiquewhite",
    0x00FFFFu32 => "aqua",
    0x7FFFD4u32 => "aquamarine",
    0xF0FFFFu32 => "azure",
    0xF5F5DCu32 => "beige",
    0xFFE4C4u32 => "bisque",
    0x000000u32 => "black",
    0xFFEBCDu32 => "blanchedalmond",
    0x0000FFu32 => "blue",
    0x8A2BE2u32 => "blueviolet",
    0xA52A2Au32 => "brown",
    0xDEB887u32 => "burlywood",
    0x5F9EA0u32 => "cadetblue",
    0x7FFF00u32 => "chartreuse",
    0xD2691Eu32 => "chocolate",
    0xFF7F50u32 => "coral",
    0x6495EDu32 => "cornflowerblue",
    0xFFF8DCu32 => "cornsilk",
    0xDC143Cu32 => "crimson",
    0x00008Bu32 => "darkblue",
    0x008B8Bu32 => "darkcyan",
    0xB8860Bu32 => "darkgoldenrod",
    0xA9A9A9u32 => "darkgray",
    0x006400u32 => "darkgreen",
    0xBDB76Bu32 => "darkkhaki",
    0x8B008Bu32 => "darkmagenta",
    0x556B2Fu32 => "darkolivegreen",
    0xFF8C00u32 => "darkorange",
    0x9932CCu32 => "darkorchid",
    0x8B0000u32 => "darkred",
    0xE9967Au32 => "darksalmon",
    0x8FBC8Fu32 => "darkseagreen",
    0x483D8Bu32 => "darkslateblue",
    0x2F4F4Fu32 => "darkslategray",
    0x00CED1u32 => "darkturquoise",
    0x9400D3u32 => "darkviolet",
    0xFF1493u32 => "deeppink",
    0x00BFFFu32 => "deepskyblue",
    0x696969u32 => "dimgray",
    0x1E90FFu32 => "dodgerblue",
    0xB22222u32 => "firebrick",
    0xFFFAF0u32 => "floralwhite",
    0x228B22u32 => "forestgreen",
    0xFF00FFu32 => "fuchsia",
    0xDCDCDCu32 => "gainsboro",
    0xF8F8FFu32 => "ghostwhite",
    0xFFD700u32 => "gold",
    0xDAA520u32 => "goldenrod",
    0x808080u32 => "gray",
    0x008000u32 => "green",
    0xADFF2Fu32 => "greenyellow",
    0xF0FFF0u32 => "honeydew",
    0xFF69B4u32 => "hotpink",
    0xCD5C5Cu32 => "indianred",
    0x4B0082u32 => "indigo",
    0xFFFFF0u32 => "ivory",
    0xF0E68Cu32 => "khaki",
    0xE6E6FAu32 => "lavender",
    0xFFF0F5u32 => "lavenderblush",
    0x7CFC00u32 => "lawngreen",
    0xFFFACDu32 => "lemonchiffon",
    0xADD8E6u32 => "lightblue",
    0xF08080u32 => "lightcoral",
    0xE0FFFFu32 => "lightcyan",
    0xFAFAD2u32 => "lightgoldenrodyellow",
    0xD3D3D3u32 => "lightgray",
    0x90EE90u32 => "lightgreen",
    0xFFB6C1u32 => "lightpink",
    0xFFA07Au32 => "lightsalmon",
    0x20B2AAu32 => "lightseagreen",
    0x87CEFAu32 => "lightskyblue",
    0x778899u32 => "lightslategray",
    0xB0C4DEu32 => "lightsteelblue",
    0xFFFFE0u32 => "lightyellow",
    0x00FF00u32 => "lime",
    0x32CD32u32 => "limegreen",
    0xFAF0E6u32 => "linen",
    0x800000u32 => "maroon",
    0x66CDAAu32 => "mediumaquamarine",
    0x0000CDu32 => "mediumblue",
    0xBA55D3u32 => "mediumorchid",
    0x9370DBu32 => "mediumpurple",
    0x3CB371u32 => "mediumseagreen",
    0x7B68EEu32 => "mediumslateblue",
    0x00FA9Au32 => "mediumspringgreen",
    0x48D1CCu32 => "mediumturquoise",
    0xC71585u32 => "mediumvioletred",
    0x191970u32 => "midnightblue",
    0xF5FFFAu32 => "mintcream",
    0xFFE4E1u32 => "mistyrose",
    0xFFE4B5u32 => "moccasin",
    0xFFDEADu32 => "navajowhite",
    0x000080u32 => "navy",
    0xFDF5E6u32 => "oldlace",
    0x808000u32 => "olive",
    0x6B8E23u32 => "olivedrab",
    0xFFA500u32 => "orange",
    0xFF4500u32 => "orangered",
    0xDA70D6u32 => "orchid",
    0xEEE8AAu32 => "palegoldenrod",
    0x98FB98u32 => "palegreen",
    0xAFEEEEu32 => "paleturquoise",
    0xDB7093u32 => "palevioletred",
    0xFFEFD5u32 => "papayawhip",
    0xFFDAB9u32 => "peachpuff",
    0xCD853Fu32 => "peru",
    0xFFC0CBu32 => "pink",
    0xDDA0DDu32 => "plum",
    0xB0E0E6u32 => "powderblue",
    0x800080u32 => "purple",
    0x663399u32 => "rebeccapurple",
    0xFF0000u32 => "red",
    0xBC8F8Fu32 => "rosybrown",
    0x4169E1u32 => "royalblue",
    0x8B4513u32 => "saddlebrown",
    0xFA8072u32 => "salmon",
    0xF4A460u32 => "sandybrown",
    0x2E8B57u32 => "seagreen",
    0xFFF5EEu32 => "seashell",
    0xA0522Du32 => "sienna",
    0xC0C0C0u32 => "silver",
    0x87CEEBu32 => "skyblue",
    0x6A5ACDu32 => "slateblue",
    0x708090u32 => "slategray",
    0xFFFAFAu32 => "snow",
    0x00FF7Fu32 => "springgreen",
    0x4682B4u32 => "steelblue",
    0xD2B48Cu32 => "tan",
    0x008080u32 => "teal",
    0xD8BFD8u32 => "thistle",
    0xFF6347u32 => "tomato",
    0x40E0D0u32 => "turquoise",
    0xEE82EEu32 => "violet",
    0xF5DEB3u32 => "wheat",
    0xFFFFFFu32 => "white",
    0xF5F5F5u32 => "whitesmoke",
    0xFFFF00u32 => "yellow",
    0x9ACD32u32 => "yellowgreen",
};
