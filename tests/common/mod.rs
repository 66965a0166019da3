#![allow(dead_code)]

pub const TINY: &str = "tiny";

pub const SMALL: &str = "Lorem ipsum dolor sit amet, consectetur \
                         adipiscing elit, sed do eiusmod tempor incididunt \
                         ut labore et dolore magna aliqua. Ut enim ad minim \
                         veniam, quis nostrud exercitation ullamco laboris \
                         nisi ut aliquip ex ea commodo consequat.";

/// A mixed-script paragraph with plenty of multi-byte chars, to keep the
/// char-indexed code honest about code units vs bytes.
pub const MIXED: &str = "Zwölf Boxkämpfer jagen Viktor quer über den \
                         großen Sylter Deich — Ça me fait plaisir, garçon! \
                         — Широкая электрификация южных губерний — \
                         Ξεσκεπάζω τὴν ψυχοφθόρα βδελυγμία — いろはにほへと \
                         ちりぬるを";

/// `SMALL` repeated until it holds roughly `chars` code units. `SMALL` is
/// plain ASCII, so byte and char counts agree.
pub fn text_of(chars: usize) -> String {
    let mut s = String::new();
    while s.len() < chars {
        s.push_str(SMALL);
        s.push('\n');
    }
    s
}

pub fn medium() -> String {
    text_of(1 << 12)
}

pub fn large() -> String {
    text_of(1 << 16)
}
