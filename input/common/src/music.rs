//! Music substitution table consumed by the runtime's audio loader.
//!
//! The runtime hashes each lump of MIDI-like music data and looks the hash up
//! in a `hash = path` config file to find an Ogg replacement.

use indexmap::IndexMap;

/// Default table for the shareware IWAD.
pub static DOOM1_TRACKS: &[(&str, &str)] = &[
    ("b2e05b4e8dff8d76f8f4c3a724e7dbd365390536", "music/d_inter.ogg"),
    ("0c0acce45130bab935d2f1e85664b29a3c724fcd", "music/d_intro.ogg"),
    ("fca4086939a68ae4ed84c96e6bf0bd5621ddbe3d", "music/d_victor.ogg"),
    ("5971e5e20554f47ca06568832abd37db5e5a94f7", "music/d_intro.ogg"),
    ("99767e32769229897f7722848fb1ceccc2314d09", "music/d_e1m1.ogg"),
    ("b5e7dfb4efe9e688bf2ae6163c9d734e89e643b1", "music/d_e1m2.ogg"),
    ("fda8fa73e4d30a6b961cd46fe6e013395e87a682", "music/d_e1m3.ogg"),
    ("3805f9bf3f1702f7e7f5483a609d7d3c4daa2323", "music/d_e1m4.ogg"),
    ("f546ed823b234fe391653029159de7b67a15dbd4", "music/d_e1m5.ogg"),
    ("4450811b5a6748cfd83e3ea241222f6b88be33f9", "music/d_e1m6.ogg"),
    ("73edb50d96b0ac03be34a6134b33e4c8f00fc486", "music/d_e1m7.ogg"),
    ("47d711a6fd32f5047879975027e5b152b52aa1dc", "music/d_e1m8.ogg"),
    ("62c631c2fdaa5ecd9a8d8f369917244f27128810", "music/d_e1m9.ogg"),
    ("7702a6449585428e718558d8ecc387ef1a21d948", "music/d_e2m1.ogg"),
    ("1cb1810989cbfae2b29ba8d6d0f8f1175de45f03", "music/d_e2m2.ogg"),
    ("7d740f3c881a22945e472c68754fd9485cb04750", "music/d_e2m4.ogg"),
    ("ae9c3dc2f9aeea002327a5204d080ea82505a310", "music/d_e2m6.ogg"),
    ("b26aad3caa420e9a2c76586cd59433b092fcba1c", "music/d_e2m7.ogg"),
    ("90f06251a2a90bfaefd47a526b28264ea64f4f83", "music/d_e2m8.ogg"),
    ("b2fb439f23c08c8e2577d262e5ed910a6a62c735", "music/d_e3m1.ogg"),
    ("b6c07bb249526b864208922d2d9ab655f4aade78", "music/d_e3m2.ogg"),
    ("ce3587ee503ffe707b2d8b690396114fdae6b411", "music/d_e3m3.ogg"),
    ("d746ea2aa16b3237422cb18ec66f26e12cb08d40", "music/d_e3m8.ogg"),
];

/// Ordered `hash -> path` mapping. A repeated hash keeps its first position
/// and takes the last path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MusicConfig {
    entries: IndexMap<String, String>,
}

impl MusicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doom1() -> Self {
        let mut config = Self::new();
        for (hash, path) in DOOM1_TRACKS {
            config.insert(hash, path);
        }
        config
    }

    pub fn insert(&mut self, hash: &str, path: &str) {
        self.entries.insert(hash.to_string(), path.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, hash: &str) -> Option<&str> {
        self.entries.get(hash).map(String::as_str)
    }

    /// Render newline-separated `hash = path` records, without a trailing newline.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(hash, path)| format!("{hash} = {path}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
