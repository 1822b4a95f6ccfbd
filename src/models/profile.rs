//! Skills and certifications shown on the about screen.

/// Rough grouping of a skill, used to pick its list glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    /// Programming languages.
    Code,
    /// Tools and engines.
    Tool,
    /// Design disciplines.
    Design,
}

impl SkillKind {
    /// Glyph rendered before the skill name.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Tool => "[#]",
            Self::Design => "(~)",
        }
    }
}

/// A single skill entry.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    /// Skill name.
    pub name: &'static str,
    /// Grouping for display.
    pub kind: SkillKind,
}

/// A certification entry with its verification link.
#[derive(Debug, Clone, Copy)]
pub struct Certification {
    /// Certification name and issuer.
    pub name: &'static str,
    /// Year obtained.
    pub year: &'static str,
    /// Verification URL.
    pub link: &'static str,
}

/// Skill table for the about screen.
pub const SKILLS: &[Skill] = &[
    Skill { name: "C", kind: SkillKind::Code },
    Skill { name: "C++", kind: SkillKind::Code },
    Skill { name: "C#", kind: SkillKind::Code },
    Skill { name: "Python", kind: SkillKind::Code },
    Skill { name: "VS Code", kind: SkillKind::Tool },
    Skill { name: "Unity Engine", kind: SkillKind::Tool },
    Skill { name: "Blender", kind: SkillKind::Tool },
    Skill { name: "LaTeX", kind: SkillKind::Tool },
    Skill { name: "Git", kind: SkillKind::Tool },
    Skill { name: "Figma", kind: SkillKind::Design },
    Skill { name: "UI/UX Design", kind: SkillKind::Design },
];

/// Certification table for the about screen.
pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "C# Unity, Udemy",
        year: "2024",
        link: "http://ude.my/UC-4c1ebcc9-30bb-4812-8ca6-a0809b055ea1",
    },
    Certification {
        name: "Python, Kaggle",
        year: "2024",
        link: "https://www.kaggle.com/learn/certification/polygrafikos/python",
    },
];
