/// A renderable glyph.
///
/// Content data refers to glyphs by symbolic key (`"Code2"`, `"Database"`, ...) so it
/// stays independent of the rendering layer; [`Icon::resolve`] turns a key into a glyph
/// at render time. The chrome-only glyphs (`Menu`, `ChevronUp`, ...) are never looked up
/// by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Code2,
    Layout,
    Layers,
    Server,
    Database,
    Cpu,
    Smartphone,
    Github,
    Globe,
    Mail,
    Linkedin,
    Twitter,
    Instagram,
    Menu,
    X,
    ArrowRight,
    Download,
    Send,
    ChevronUp,
}

/// Keys recognised in content data, in lookup order.
///
/// `Layout` and `Github` get their own glyphs here rather than the default. This table
/// is also what `content::validate` checks skill keys against: a key missing from it
/// is reported as `ContentError::UnknownIcon` even though it still renders as
/// [`Icon::DEFAULT`].
const KEYED: [(&str, Icon); 13] = [
    ("Code2", Icon::Code2),
    ("Layout", Icon::Layout),
    ("Layers", Icon::Layers),
    ("Server", Icon::Server),
    ("Database", Icon::Database),
    ("Cpu", Icon::Cpu),
    ("Smartphone", Icon::Smartphone),
    ("Github", Icon::Github),
    ("Globe", Icon::Globe),
    ("Mail", Icon::Mail),
    ("Linkedin", Icon::Linkedin),
    ("Twitter", Icon::Twitter),
    ("Instagram", Icon::Instagram),
];

impl Icon {
    /// Glyph used for any key that is not recognised.
    pub const DEFAULT: Icon = Icon::Globe;

    /// Resolve a symbolic key. Unknown keys fall back to [`Icon::DEFAULT`], never fail.
    pub fn resolve(key: &str) -> Icon {
        Self::lookup(key).unwrap_or(Self::DEFAULT)
    }

    pub fn is_known(key: &str) -> bool {
        Self::lookup(key).is_some()
    }

    fn lookup(key: &str) -> Option<Icon> {
        KEYED
            .iter()
            .find_map(|(k, icon)| if *k == key { Some(*icon) } else { None })
    }

    /// Icon-font class for this glyph (lucide-static font).
    pub fn class(self) -> &'static str {
        match self {
            Icon::Code2 => "icon-code-xml",
            Icon::Layout => "icon-layout-dashboard",
            Icon::Layers => "icon-layers",
            Icon::Server => "icon-server",
            Icon::Database => "icon-database",
            Icon::Cpu => "icon-cpu",
            Icon::Smartphone => "icon-smartphone",
            Icon::Github => "icon-github",
            Icon::Globe => "icon-globe",
            Icon::Mail => "icon-mail",
            Icon::Linkedin => "icon-linkedin",
            Icon::Twitter => "icon-twitter",
            Icon::Instagram => "icon-instagram",
            Icon::Menu => "icon-menu",
            Icon::X => "icon-x",
            Icon::ArrowRight => "icon-arrow-right",
            Icon::Download => "icon-download",
            Icon::Send => "icon-send",
            Icon::ChevronUp => "icon-chevron-up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_known_keys() {
        assert_eq!(Icon::resolve("Code2"), Icon::Code2);
        assert_eq!(Icon::resolve("Database"), Icon::Database);
        assert_eq!(Icon::resolve("Smartphone"), Icon::Smartphone);
        assert_eq!(Icon::resolve("Github"), Icon::Github);
        assert!(Icon::is_known("Layout"));
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        assert_eq!(Icon::resolve("Spaceship"), Icon::DEFAULT);
        assert_eq!(Icon::resolve(""), Icon::Globe);
        // keys are case sensitive, like the content that references them
        assert_eq!(Icon::resolve("code2"), Icon::Globe);
        assert!(!Icon::is_known("Spaceship"));
    }

    #[test]
    fn test_chrome_glyphs_are_not_keyed() {
        assert!(!Icon::is_known("Menu"));
        assert!(!Icon::is_known("ChevronUp"));
        assert_eq!(Icon::resolve("Menu"), Icon::DEFAULT);
    }

    #[test]
    fn test_every_skill_key_is_keyed() {
        for skill in crate::content::SKILLS {
            assert!(Icon::is_known(skill.icon), "{}", skill.icon);
            assert_ne!(Icon::resolve(skill.icon), Icon::DEFAULT, "{}", skill.icon);
        }
    }

    #[test]
    fn test_font_classes_are_distinct() {
        let mut classes = KEYED.iter().map(|(_, i)| i.class()).collect::<Vec<_>>();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), KEYED.len());
        assert!(classes.iter().all(|c| c.starts_with("icon-")));
    }
}
