/// The three kinds of record a catalog can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilmKind {
    Game,
    Cartoon,
    Series,
}

const ALL_KINDS: &[FilmKind] = &[FilmKind::Game, FilmKind::Cartoon, FilmKind::Series];

impl FilmKind {
    /// Type tag used in scripts and in `type == ...` conditions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Cartoon => "cartoon",
            Self::Series => "series",
        }
    }

    /// Label used when rendering a record (e.g. "Game film: ...").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Game => "Game",
            Self::Cartoon => "Cartoon",
            Self::Series => "Series",
        }
    }

    pub fn all() -> &'static [FilmKind] {
        ALL_KINDS
    }
}

impl std::fmt::Display for FilmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not a known film kind.
#[derive(Debug, Clone)]
pub struct FilmKindParseError(pub String);

impl std::fmt::Display for FilmKindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown film type: '{}'", self.0)
    }
}

impl std::error::Error for FilmKindParseError {}

impl std::str::FromStr for FilmKind {
    type Err = FilmKindParseError;

    /// Exact, case-sensitive match against [`FilmKind::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FilmKindParseError(s.to_string()))
    }
}

/// How a cartoon was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationType {
    /// Hand-drawn or cel animation
    Drawn,
    /// Puppet / stop-motion with dolls
    Doll,
    /// Claymation
    Plasticine,
}

const ALL_ANIMATION_TYPES: &[AnimationType] = &[
    AnimationType::Drawn,
    AnimationType::Doll,
    AnimationType::Plasticine,
];

impl AnimationType {
    /// Name used when rendering a cartoon.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drawn => "drawn",
            Self::Doll => "doll",
            Self::Plasticine => "plasticine",
        }
    }

    /// Keywords accepted in scripts and conditions. The first entry is the
    /// canonical input keyword.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Drawn => &["drawn"],
            Self::Doll => &["puppet", "doll"],
            Self::Plasticine => &["plasticine"],
        }
    }

    /// Look up an animation type by any of its keywords (case-sensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        ALL_ANIMATION_TYPES
            .iter()
            .copied()
            .find(|t| t.keywords().contains(&keyword))
    }

    pub fn all() -> &'static [AnimationType] {
        ALL_ANIMATION_TYPES
    }
}

impl std::fmt::Display for AnimationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
