//! The profile data model.
//!
//! Every struct is `Serialize` so the whole record can be dropped into the
//! template context as-is. The data is static and developer-authored — there is
//! no parsing, no validation layer, no lifecycle beyond one render.

use serde::Serialize;

/// Complete résumé content for one person.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub address: String,
    /// Professional summary, one paragraph per entry.
    pub summary: Vec<String>,
    pub languages: Vec<Language>,
    pub contact: Contact,
    pub links: Links,
    pub skills: SkillMatrix,
    pub certifications: Vec<Certification>,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    /// File stem of the portrait under `assets/media/`.
    pub photo: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub linkedin: String,
}

/// Public profiles rendered as the "links" section, one icon each.
#[derive(Debug, Clone, Serialize)]
pub struct Links {
    pub blog: String,
    pub github: String,
}

/// A single skill with years of hands-on experience.
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: String,
    pub years: u8,
}

/// The "core technologies" section, grouped the way the cover page shows them.
#[derive(Debug, Clone, Serialize)]
pub struct SkillMatrix {
    pub code: Vec<Skill>,
    pub devops: Vec<Skill>,
    pub others: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub name: String,
    /// Exam code, e.g. "SAA-C03". Not every certification has one.
    pub code: Option<String>,
}

/// One position in the work history.
///
/// `end: None` (or an empty string) marks the current position — the duration
/// filter renders it as "Since {start}".
#[derive(Debug, Clone, Serialize)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    /// `YYYY/MM`
    pub start: String,
    /// `YYYY/MM`, absent while the position is held.
    pub end: Option<String>,
    pub summary: String,
    pub highlights: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    /// `YYYY/MM`
    pub start: String,
    /// `YYYY/MM`, absent while still enrolled.
    pub end: Option<String>,
    pub notes: Vec<String>,
}
