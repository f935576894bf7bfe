//! The static profile record.
//!
//! Hand-authored, literal content — edit this file to update the résumé.

use crate::models::{
    Certification, Contact, Education, Language, Links, Profile, Skill, SkillMatrix,
    WorkExperience,
};

fn skill(name: &str, years: u8) -> Skill {
    Skill {
        name: name.into(),
        years,
    }
}

/// Builds the one profile this tool renders.
pub fn profile() -> Profile {
    Profile {
        name: "Jonas Keller".into(),
        title: "Lead Software Engineer & Certified AWS Solutions Architect".into(),
        subtitle: "Over 10 years of experience • Product mindset • Strong communication".into(),
        address: "Berlin (Friedrichshain)".into(),
        summary: vec![
            "Over 10 years of experience combining deep technical expertise, a strong \
             product mindset, and excellent communication skills."
                .into(),
            "In 2017 I co-founded and led a software consultancy focused on digital \
             transformation, building and supervising applications for clients ranging \
             from start-ups to DAX companies."
                .into(),
            "Since 2023 I have been working as a freelance developer and advisor again.".into(),
        ],
        languages: vec![
            Language {
                language: "German".into(),
                proficiency: "Native speaker".into(),
            },
            Language {
                language: "English".into(),
                proficiency: "Business fluent".into(),
            },
        ],
        contact: Contact {
            phone: "+49 152 28817394".into(),
            email: "jonas@kellercodes.de".into(),
            linkedin: "@jonas-keller-dev".into(),
        },
        links: Links {
            blog: "@JonasShipsIt".into(),
            github: "@JonasShipsIt".into(),
        },
        skills: SkillMatrix {
            code: vec![
                skill("Rust", 6),
                skill("Python (FastAPI, Django)", 10),
                skill("TypeScript", 5),
                skill("HTML, CSS (Tailwind)", 4),
                skill("Test-driven Development", 8),
            ],
            devops: vec![
                skill("Amazon Web Services (AWS)", 7),
                skill("CI/CD", 8),
                skill("Docker", 8),
                skill("Infrastructure as Code", 5),
                skill("Kubernetes", 3),
            ],
            others: vec![
                skill("SQL Databases (PostgreSQL)", 9),
                skill("NoSQL Databases (DynamoDB, Redis)", 4),
                skill("Microservices", 6),
                skill("REST APIs (incl. OpenAPI)", 7),
                skill("Event-driven Architectures", 4),
            ],
        },
        certifications: vec![
            Certification {
                name: "AWS Solutions Architect - Associate".into(),
                code: Some("SAA-C03".into()),
            },
            Certification {
                name: "AWS Certified Developer - Associate".into(),
                code: Some("DVA-C02".into()),
            },
        ],
        experience: vec![
            WorkExperience {
                title: "Freelance Software Engineer & Advisor".into(),
                company: "Self-employed".into(),
                start: "2023/01".into(),
                end: None,
                summary: "Hands-on development and architecture consulting for product \
                          teams in fintech and logistics."
                    .into(),
                highlights: vec![
                    "Designed and built an event-driven settlement pipeline processing \
                     ~2M transactions per day."
                        .into(),
                    "Cut a client's AWS bill by 40% by consolidating workloads onto \
                     Graviton and spot capacity."
                        .into(),
                    "Coached three teams on test-driven development and trunk-based \
                     delivery."
                        .into(),
                ],
                technologies: vec![
                    "Rust".into(),
                    "Python".into(),
                    "AWS".into(),
                    "PostgreSQL".into(),
                    "Terraform".into(),
                ],
            },
            WorkExperience {
                title: "Co-founder & Technical Lead".into(),
                company: "Ansatz Digital GmbH".into(),
                start: "2017/04".into(),
                end: Some("2022/12".into()),
                summary: "Co-founded a 15-person consultancy delivering custom software \
                          for clients from seed-stage start-ups to DAX companies."
                    .into(),
                highlights: vec![
                    "Led delivery of 20+ client projects end to end, from discovery \
                     workshops to production operations."
                        .into(),
                    "Built the company's reference architecture for containerized \
                     services, adopted across all engagements."
                        .into(),
                    "Grew and mentored a team of twelve engineers; ran hiring and \
                     technical interviews."
                        .into(),
                ],
                technologies: vec![
                    "Python".into(),
                    "Django".into(),
                    "TypeScript".into(),
                    "Docker".into(),
                    "Kubernetes".into(),
                    "AWS".into(),
                ],
            },
            WorkExperience {
                title: "Software Engineer".into(),
                company: "Liefergrün Logistics AG".into(),
                start: "2014/09".into(),
                end: Some("2017/03".into()),
                summary: "Backend engineer on the route-planning platform of a mid-size \
                          logistics provider."
                    .into(),
                highlights: vec![
                    "Rewrote the depot-assignment service, reducing nightly batch time \
                     from 4 hours to 20 minutes."
                        .into(),
                    "Introduced automated integration testing against a dockerized \
                     staging fleet."
                        .into(),
                ],
                technologies: vec![
                    "Python".into(),
                    "PostgreSQL".into(),
                    "RabbitMQ".into(),
                    "Jenkins".into(),
                ],
            },
        ],
        education: vec![
            Education {
                degree: "M.Sc. Mathematics".into(),
                institution: "Humboldt University of Berlin".into(),
                start: "2012/10".into(),
                end: Some("2014/09".into()),
                notes: vec![
                    "Focus on numerical optimization and graph theory.".into(),
                    "Thesis: column-generation heuristics for vehicle routing.".into(),
                ],
            },
            Education {
                degree: "B.Sc. Mathematics".into(),
                institution: "Leipzig University".into(),
                start: "2009/10".into(),
                end: Some("2012/09".into()),
                notes: vec!["Minor in computer science.".into()],
            },
        ],
        photo: "profile".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_sections_are_populated() {
        let p = profile();
        assert!(!p.name.is_empty());
        assert!(!p.summary.is_empty());
        assert!(!p.languages.is_empty());
        assert!(!p.skills.code.is_empty());
        assert!(!p.skills.devops.is_empty());
        assert!(!p.skills.others.is_empty());
        assert!(!p.certifications.is_empty());
        assert!(!p.experience.is_empty());
        assert!(!p.education.is_empty());
    }

    #[test]
    fn test_current_position_is_open_ended() {
        let p = profile();
        assert!(
            p.experience.iter().any(|e| e.end.is_none()),
            "at least one position should be ongoing"
        );
    }

    #[test]
    fn test_date_fields_use_year_month_form() {
        let p = profile();
        let well_formed = |s: &str| {
            s.len() == 7 && s.as_bytes()[4] == b'/' && s.chars().filter(|c| c.is_ascii_digit()).count() == 6
        };
        for e in &p.experience {
            assert!(well_formed(&e.start), "bad start date: {}", e.start);
            if let Some(end) = &e.end {
                assert!(well_formed(end), "bad end date: {end}");
            }
        }
        for e in &p.education {
            assert!(well_formed(&e.start), "bad start date: {}", e.start);
        }
    }
}
