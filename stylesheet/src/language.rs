use std::fmt;
use std::str::FromStr;

use crate::error::LanguageError;

/// The stylesheet languages a skeleton can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetLanguage {
    #[default]
    Css,
    Sass,
    Scss,
    Less,
    Stylus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// comment`
    Line,
    /// `/* comment */`
    Block,
}

impl CommentStyle {
    pub fn prefix(self) -> &'static str {
        match self {
            CommentStyle::Line => "// ",
            CommentStyle::Block => "/* ",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            CommentStyle::Line => "",
            CommentStyle::Block => " */",
        }
    }
}

/// Formatting rules for one target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub language: TargetLanguage,
    /// Human-readable name.
    pub name: &'static str,
    /// Lowercase identifier accepted by `FromStr` and used in settings files.
    pub id: &'static str,
    /// Default file extension, without the dot.
    pub extension: &'static str,
    /// Whether rules are wrapped in `{}` or delimited by indentation.
    pub braces: bool,
    pub comments: CommentStyle,
}

/// One row per language, in `TargetLanguage` declaration order.
static DIALECTS: [Dialect; 5] = [
    Dialect {
        language: TargetLanguage::Css,
        name: "CSS",
        id: "css",
        extension: "css",
        braces: true,
        comments: CommentStyle::Block,
    },
    Dialect {
        language: TargetLanguage::Sass,
        name: "SASS",
        id: "sass",
        extension: "sass",
        braces: false,
        comments: CommentStyle::Line,
    },
    Dialect {
        language: TargetLanguage::Scss,
        name: "SCSS",
        id: "scss",
        extension: "scss",
        braces: true,
        comments: CommentStyle::Line,
    },
    Dialect {
        language: TargetLanguage::Less,
        name: "LESS",
        id: "less",
        extension: "less",
        braces: true,
        comments: CommentStyle::Line,
    },
    Dialect {
        language: TargetLanguage::Stylus,
        name: "Stylus",
        id: "stylus",
        extension: "styl",
        braces: false,
        comments: CommentStyle::Line,
    },
];

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::Css,
        TargetLanguage::Sass,
        TargetLanguage::Scss,
        TargetLanguage::Less,
        TargetLanguage::Stylus,
    ];

    pub fn dialect(self) -> &'static Dialect {
        &DIALECTS[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.dialect().id
    }

    pub fn extension(self) -> &'static str {
        self.dialect().extension
    }
}

impl FromStr for TargetLanguage {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "styl" {
            return Ok(TargetLanguage::Stylus);
        }
        DIALECTS
            .iter()
            .find(|d| d.id == wanted)
            .map(|d| d.language)
            .ok_or_else(|| LanguageError::Unknown(s.to_string()))
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dialect().name)
    }
}
