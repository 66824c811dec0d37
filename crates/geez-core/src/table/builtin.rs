// Geez Builtin Phonetic Table
// Latin phonetic sequences to Ethiopic syllables and punctuation
//
// Rows are registered in order. A few sequences appear twice ("aa", "ch'",
// "ts'"); the later row is the effective one.

pub const GEEZ_MAPPINGS: &[(&str, &str)] = &[
    // ሀ (h)
    ("h", "ሀ"), ("hu", "ሁ"), ("hi", "ሂ"), ("ha", "ሃ"),
    ("he", "ሄ"), ("h'", "ህ"), ("ho", "ሆ"),
    // ለ (l)
    ("l", "ለ"), ("lu", "ሉ"), ("li", "ሊ"), ("la", "ላ"),
    ("le", "ሌ"), ("l'", "ል"), ("lo", "ሎ"), ("lwa", "ሏ"),
    // ሐ (hh)
    ("hh", "ሐ"), ("hhu", "ሑ"), ("hhi", "ሒ"), ("hha", "ሓ"),
    ("hhe", "ሔ"), ("hh'", "ሕ"), ("hho", "ሖ"), ("hhwa", "ሗ"),
    // መ (m)
    ("m", "መ"), ("mu", "ሙ"), ("mi", "ሚ"), ("ma", "ማ"),
    ("me", "ሜ"), ("m'", "ም"), ("mo", "ሞ"), ("mwa", "ሟ"),
    // ሠ (sz)
    ("sz", "ሠ"), ("szu", "ሡ"), ("szi", "ሢ"), ("sza", "ሣ"),
    ("sze", "ሤ"), ("sz'", "ሥ"), ("szo", "ሦ"), ("szwa", "ሧ"),
    // ረ (r)
    ("r", "ረ"), ("ru", "ሩ"), ("ri", "ሪ"), ("ra", "ራ"),
    ("re", "ሬ"), ("r'", "ር"), ("ro", "ሮ"), ("rwa", "ሯ"),
    // ሰ (s)
    ("s", "ሰ"), ("su", "ሱ"), ("si", "ሲ"), ("sa", "ሳ"),
    ("se", "ሴ"), ("ss", "ስ"), ("so", "ሶ"), ("swa", "ሷ"),
    // ሸ (sh)
    ("sh", "ሸ"), ("shu", "ሹ"), ("shi", "ሺ"), ("sha", "ሻ"),
    ("she", "ሼ"), ("sh'", "ሽ"), ("sho", "ሾ"), ("shwa", "ሿ"),
    // ቀ (q)
    ("q", "ቀ"), ("qu", "ቁ"), ("qi", "ቂ"), ("qa", "ቃ"),
    ("qe", "ቄ"), ("q'", "ቅ"), ("qo", "ቆ"), ("qwa", "ቈ"),
    ("qwi", "ቊ"), ("qwaa", "ቋ"), ("qwe", "ቌ"), ("qw", "ቍ"),
    // በ (b)
    ("b", "በ"), ("bu", "ቡ"), ("bi", "ቢ"), ("ba", "ባ"),
    ("be", "ቤ"), ("b'", "ብ"), ("bo", "ቦ"), ("bwa", "ቧ"),
    // ተ (t)
    ("t", "ተ"), ("tu", "ቱ"), ("ti", "ቲ"), ("ta", "ታ"),
    ("te", "ቴ"), ("t'", "ት"), ("to", "ቶ"), ("twa", "ቷ"),
    // ቸ (ch)
    ("ch", "ቸ"), ("chu", "ቹ"), ("chi", "ቺ"), ("cha", "ቻ"),
    ("che", "ቼ"), ("ch'", "ች"), ("cho", "ቾ"), ("chwa", "ቿ"),
    // ኀ (x)
    ("x", "ኀ"), ("xu", "ኁ"), ("xi", "ኂ"), ("xa", "ኃ"),
    ("xe", "ኄ"), ("x'", "ኅ"), ("xo", "ኆ"), ("xwa", "ኈ"),
    ("xwi", "ኊ"), ("xwaa", "ኋ"), ("xwe", "ኌ"), ("xw", "ኍ"),
    // ነ (n)
    ("n", "ነ"), ("nu", "ኑ"), ("ni", "ኒ"), ("na", "ና"),
    ("ne", "ኔ"), ("nn", "ን"), ("no", "ኖ"), ("nwa", "ኗ"),
    // ኘ (ny)
    ("ny", "ኘ"), ("nyu", "ኙ"), ("nyi", "ኚ"), ("nya", "ኛ"),
    ("nye", "ኜ"), ("ny'", "ኝ"), ("nyo", "ኞ"), ("nywa", "ኟ"),
    // አ (vowels)
    ("a", "አ"), ("u", "ኡ"), ("i", "ኢ"), ("aa", "ኣ"),
    ("e", "ኤ"), ("ea", "እ"), ("o", "ኦ"), ("oa", "ኧ"),
    // ከ (k)
    ("k", "ከ"), ("ku", "ኩ"), ("ki", "ኪ"), ("ka", "ካ"),
    ("ke", "ኬ"), ("k'", "ክ"), ("ko", "ኮ"), ("kwa", "ኰ"),
    ("kwi", "ኲ"), ("kwaa", "ኳ"), ("kwe", "ኴ"), ("kw", "ኵ"),
    // ኸ (kh)
    ("kh", "ኸ"), ("khu", "ኹ"), ("khi", "ኺ"), ("kha", "ኻ"),
    ("khe", "ኼ"), ("kh'", "ኽ"), ("kho", "ኾ"),
    // ወ (w)
    ("w", "ወ"), ("wu", "ዉ"), ("wi", "ዊ"), ("wa", "ዋ"),
    ("we", "ዌ"), ("w'", "ው"), ("wo", "ዎ"),
    // ዐ (aa), overrides the vowel row above
    ("aa", "ዐ"), ("aau", "ዑ"), ("aai", "ዒ"), ("aaa", "ዓ"),
    ("aae", "ዔ"), ("aa'", "ዕ"), ("aao", "ዖ"),
    // ዘ (z)
    ("z", "ዘ"), ("zu", "ዙ"), ("zi", "ዚ"), ("za", "ዛ"),
    ("ze", "ዜ"), ("z'", "ዝ"), ("zo", "ዞ"), ("zwa", "ዟ"),
    // ዠ (zh)
    ("zh", "ዠ"), ("zhu", "ዡ"), ("zhi", "ዢ"), ("zha", "ዣ"),
    ("zhe", "ዤ"), ("zh'", "ዥ"), ("zho", "ዦ"), ("zhwa", "ዧ"),
    // የ (y)
    ("y", "የ"), ("yu", "ዩ"), ("yi", "ዪ"), ("ya", "ያ"),
    ("ye", "ዬ"), ("y'", "ይ"), ("yo", "ዮ"),
    // ደ (d)
    ("d", "ደ"), ("du", "ዱ"), ("di", "ዲ"), ("da", "ዳ"),
    ("de", "ዴ"), ("d'", "ድ"), ("do", "ዶ"), ("dwa", "ዷ"),
    // ጀ (j)
    ("j", "ጀ"), ("ju", "ጁ"), ("ji", "ጂ"), ("ja", "ጃ"),
    ("je", "ጄ"), ("j'", "ጅ"), ("jo", "ጆ"), ("jwa", "ጇ"),
    // ገ (g)
    ("g", "ገ"), ("gu", "ጉ"), ("gi", "ጊ"), ("ga", "ጋ"),
    ("ge", "ጌ"), ("g'", "ግ"), ("go", "ጎ"), ("gwa", "ጐ"),
    ("gwi", "ጒ"), ("gwaa", "ጓ"), ("gwe", "ጔ"), ("gw", "ጕ"),
    // ጠ (th)
    ("th", "ጠ"), ("thu", "ጡ"), ("thi", "ጢ"), ("tha", "ጣ"),
    ("the", "ጤ"), ("th'", "ጥ"), ("tho", "ጦ"), ("thwa", "ጧ"),
    // ጨ (ch'), overrides the sixth order of ቸ
    ("ch'", "ጨ"), ("ch'u", "ጩ"), ("ch'i", "ጪ"), ("ch'a", "ጫ"),
    ("ch'e", "ጬ"), ("ch''", "ጭ"), ("ch'o", "ጮ"), ("ch'wa", "ጯ"),
    // ጰ (ph)
    ("ph", "ጰ"), ("phu", "ጱ"), ("phi", "ጲ"), ("pha", "ጳ"),
    ("phe", "ጴ"), ("ph'", "ጵ"), ("pho", "ጶ"), ("phwa", "ጷ"),
    // ጸ (ts)
    ("ts", "ጸ"), ("tsu", "ጹ"), ("tsi", "ጺ"), ("tsa", "ጻ"),
    ("tse", "ጼ"), ("ts'", "ጽ"), ("tso", "ጾ"), ("tswa", "ጿ"),
    // ፀ (ts'), overrides the sixth order of ጸ
    ("ts'", "ፀ"), ("ts'u", "ፁ"), ("ts'i", "ፂ"), ("ts'a", "ፃ"),
    ("ts'e", "ፄ"), ("ts''", "ፅ"), ("ts'o", "ፆ"),
    // ፈ (f)
    ("f", "ፈ"), ("fu", "ፉ"), ("fi", "ፊ"), ("fa", "ፋ"),
    ("fe", "ፌ"), ("ff", "ፍ"), ("fo", "ፎ"), ("fwa", "ፏ"),
    // ፐ (p)
    ("p", "ፐ"), ("pu", "ፑ"), ("pi", "ፒ"), ("pa", "ፓ"),
    ("pe", "ፔ"), ("p'", "ፕ"), ("po", "ፖ"), ("pwa", "ፗ"),
    // Punctuation
    (":", "፡"),  // word separator
    (":-", "፤"), // semicolon
    (".", "።"),  // full stop
    (":,", "፣"), // comma
    (":!", "፥"), // colon
    (":?", "፧"), // question mark
    (":-:", "፦"), // preface colon
];
