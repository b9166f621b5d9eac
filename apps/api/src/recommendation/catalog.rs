use std::sync::OnceLock;

use crate::models::listing::Listing;

/// Where remote-friendly listings say they are located.
pub const REMOTE_LOCATION: &str = "Remote";

struct Seed {
    id: u32,
    title: &'static str,
    company: &'static str,
    skills: &'static [&'static str],
    location: &'static str,
    base_score: u32,
    description: &'static str,
    match_reason: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        title: "Data Science Intern",
        company: "TechCorp India",
        skills: &["Python", "SQL", "Machine Learning"],
        location: "Bengaluru",
        base_score: 95,
        description: "Work on real-world ML projects with experienced data scientists",
        match_reason: "Perfect match: Python, SQL skills + Bengaluru location",
    },
    Seed {
        id: 2,
        title: "Frontend Developer Intern",
        company: "StartupXYZ",
        skills: &["React", "JavaScript", "HTML", "CSS"],
        location: "Mumbai",
        base_score: 88,
        description: "Build modern web applications using React and latest technologies",
        match_reason: "Strong match: React, JavaScript skills + Web Development interest",
    },
    Seed {
        id: 3,
        title: "Cloud Engineering Intern",
        company: "CloudTech Solutions",
        skills: &["AWS", "Python", "DevOps"],
        location: REMOTE_LOCATION,
        base_score: 82,
        description: "Learn cloud infrastructure and deployment automation",
        match_reason: "Good match: AWS skills + Remote work preference",
    },
    Seed {
        id: 4,
        title: "Cybersecurity Analyst Intern",
        company: "SecureNet",
        skills: &["Network Security", "Python", "Ethical Hacking"],
        location: "Delhi",
        base_score: 78,
        description: "Protect digital assets and learn security best practices",
        match_reason: "Match: Python skills + Cybersecurity interest",
    },
    Seed {
        id: 5,
        title: "UI/UX Design Intern",
        company: "DesignStudio",
        skills: &["Figma", "Adobe XD", "User Research"],
        location: "Pune",
        base_score: 75,
        description: "Create beautiful and user-friendly digital experiences",
        match_reason: "Match: Design interest + Creative skills",
    },
];

/// The read-only internship catalog, in display order.
pub fn catalog() -> &'static [Listing] {
    static CATALOG: OnceLock<Vec<Listing>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        SEEDS
            .iter()
            .map(|seed| Listing {
                id: seed.id,
                title: seed.title.to_string(),
                company: seed.company.to_string(),
                skills: seed.skills.iter().map(|s| s.to_string()).collect(),
                location: seed.location.to_string(),
                base_score: seed.base_score,
                description: seed.description.to_string(),
                match_reason: seed.match_reason.to_string(),
            })
            .collect()
    })
}

pub fn find_listing(id: u32) -> Option<&'static Listing> {
    catalog().iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_unique_ids_in_order() {
        let ids: Vec<u32> = catalog().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_find_listing() {
        assert_eq!(find_listing(3).unwrap().company, "CloudTech Solutions");
        assert!(find_listing(42).is_none());
    }
}
