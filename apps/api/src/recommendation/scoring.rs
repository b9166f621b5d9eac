//! Fit scoring: ranks catalog listings against a submitted profile.
//!
//! Algorithm (per listing):
//! 1. skills:   20 points per listing skill the profile names (exact, case-sensitive)
//! 2. location: 15 points if remote is OK, the city matches, or the listing is remote
//! 3. sector:   25 points if the title contains any keyword of the profile's sector
//! 4. total is capped at 100
//!
//! Every listing is kept, including zero scores. Ranking is a stable sort, so
//! equal scores keep catalog order.

use crate::models::listing::{Listing, ScoredListing};
use crate::models::profile::{Profile, Sector};
use crate::recommendation::catalog::REMOTE_LOCATION;

pub const SKILL_POINTS: u32 = 20;
pub const LOCATION_POINTS: u32 = 15;
pub const SECTOR_POINTS: u32 = 25;
pub const MAX_SCORE: u32 = 100;
pub const MAX_RESULTS: usize = 5;

/// Title keywords that mark a listing as belonging to a sector.
pub fn sector_keywords(sector: Sector) -> &'static [&'static str] {
    match sector {
        Sector::DataScience => &["Data Science", "ML", "Analytics"],
        Sector::WebDev => &["Frontend", "Backend", "Web"],
        Sector::Cloud => &["Cloud", "AWS", "DevOps"],
        Sector::Cybersecurity => &["Security", "Cybersecurity"],
        Sector::Design => &["Design", "UI", "UX"],
        Sector::Content => &[],
    }
}

pub fn skill_score(listing: &Listing, profile: &Profile) -> u32 {
    let matched = listing
        .skills
        .iter()
        .filter(|skill| profile.has_skill(skill.as_str()))
        .count() as u32;
    matched * SKILL_POINTS
}

pub fn location_score(listing: &Listing, profile: &Profile) -> u32 {
    if profile.remote_ok
        || listing.location == profile.location
        || listing.location == REMOTE_LOCATION
    {
        LOCATION_POINTS
    } else {
        0
    }
}

pub fn sector_score(listing: &Listing, profile: &Profile) -> u32 {
    let hit = sector_keywords(profile.sector)
        .iter()
        .any(|keyword| listing.title.contains(keyword));
    if hit {
        SECTOR_POINTS
    } else {
        0
    }
}

pub fn score_listing(listing: &Listing, profile: &Profile) -> u32 {
    let total = skill_score(listing, profile)
        + location_score(listing, profile)
        + sector_score(listing, profile);
    total.min(MAX_SCORE)
}

/// Scores every listing and returns the top `MAX_RESULTS`, best first.
pub fn rank_listings(listings: &[Listing], profile: &Profile) -> Vec<ScoredListing> {
    let mut scored: Vec<ScoredListing> = listings
        .iter()
        .map(|listing| ScoredListing::new(listing.clone(), score_listing(listing, profile)))
        .collect();

    // sort_by is stable: ties keep catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RESULTS);
    scored
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Education;
    use crate::recommendation::catalog::catalog;

    fn make_profile(skills: &[&str], sector: Sector, location: &str, remote_ok: bool) -> Profile {
        Profile {
            education: Education::Graduate,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            sector,
            location: location.to_string(),
            remote_ok,
        }
    }

    fn titles(results: &[ScoredListing]) -> Vec<&str> {
        results.iter().map(|r| r.listing.title.as_str()).collect()
    }

    #[test]
    fn test_data_science_profile_ranks_data_science_first_at_80() {
        let profile = make_profile(&["Python", "SQL"], Sector::DataScience, "Bengaluru", false);
        let results = rank_listings(catalog(), &profile);

        assert_eq!(results[0].listing.title, "Data Science Intern");
        assert_eq!(results[0].listing.company, "TechCorp India");
        assert_eq!(results[0].score, 80);
        // The catalog's own 95 is display data only.
        assert_eq!(results[0].listing.base_score, 95);
    }

    #[test]
    fn test_full_ranking_for_data_science_profile() {
        let profile = make_profile(&["Python", "SQL"], Sector::DataScience, "Bengaluru", false);
        let results = rank_listings(catalog(), &profile);

        let scores: Vec<u32> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![80, 35, 20, 0, 0]);
        assert_eq!(
            titles(&results),
            vec![
                "Data Science Intern",
                "Cloud Engineering Intern",
                "Cybersecurity Analyst Intern",
                "Frontend Developer Intern",
                "UI/UX Design Intern",
            ]
        );
    }

    #[test]
    fn test_mismatched_profile_keeps_all_listings_at_zero_in_catalog_order() {
        let profile = make_profile(&["Cobol"], Sector::Content, "Nowhere", false);
        let results = rank_listings(catalog(), &profile);

        // Only the remote listing earns location points.
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].listing.title, "Cloud Engineering Intern");
        assert_eq!(results[0].score, 15);
        let rest: Vec<u32> = results[1..].iter().map(|r| r.listing.id).collect();
        assert_eq!(rest, vec![1, 2, 4, 5]);
        assert!(results[1..].iter().all(|r| r.score == 0));
    }

    #[test]
    fn test_skill_match_is_case_sensitive() {
        let listing = &catalog()[0];
        let lower = make_profile(&["python", "sql"], Sector::Content, "x", false);
        let exact = make_profile(&["Python", "SQL"], Sector::Content, "x", false);

        assert_eq!(skill_score(listing, &lower), 0);
        assert_eq!(skill_score(listing, &exact), 40);
    }

    #[test]
    fn test_location_points() {
        let bengaluru = &catalog()[0];
        let remote = &catalog()[2];

        let city = make_profile(&[], Sector::Content, "Bengaluru", false);
        let elsewhere = make_profile(&[], Sector::Content, "Pune", false);
        let remote_ok = make_profile(&[], Sector::Content, "", true);

        assert_eq!(location_score(bengaluru, &city), LOCATION_POINTS);
        assert_eq!(location_score(bengaluru, &elsewhere), 0);
        assert_eq!(location_score(bengaluru, &remote_ok), LOCATION_POINTS);
        assert_eq!(location_score(remote, &elsewhere), LOCATION_POINTS);
    }

    #[test]
    fn test_sector_keyword_is_case_sensitive_substring() {
        let cyber = &catalog()[3];
        let design = &catalog()[4];

        // "Cybersecurity" contains lowercase "security", so only the
        // "Cybersecurity" keyword hits.
        let profile = make_profile(&[], Sector::Cybersecurity, "", false);
        assert_eq!(sector_score(cyber, &profile), SECTOR_POINTS);

        let profile = make_profile(&[], Sector::Design, "", false);
        assert_eq!(sector_score(design, &profile), SECTOR_POINTS);
        assert_eq!(sector_score(cyber, &profile), 0);
    }

    #[test]
    fn test_content_sector_never_scores() {
        let profile = make_profile(&[], Sector::Content, "", false);
        assert!(catalog().iter().all(|l| sector_score(l, &profile) == 0));
    }

    #[test]
    fn test_score_is_capped_at_100() {
        let listing = Listing {
            id: 99,
            title: "Cloud AWS Intern".to_string(),
            company: "Test".to_string(),
            skills: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            location: "Remote".to_string(),
            base_score: 0,
            description: String::new(),
            match_reason: String::new(),
        };
        let profile = make_profile(&["A", "B", "C", "D"], Sector::Cloud, "", true);

        assert_eq!(score_listing(&listing, &profile), MAX_SCORE);
    }

    #[test]
    fn test_ranking_is_idempotent_and_sorted() {
        let profiles = [
            make_profile(&["Python"], Sector::Cloud, "Delhi", false),
            make_profile(&["React", "HTML"], Sector::WebDev, "Mumbai", true),
            make_profile(&["Figma"], Sector::Design, "Pune", false),
            make_profile(&[], Sector::Cybersecurity, "", true),
        ];

        for profile in &profiles {
            let first = rank_listings(catalog(), profile);
            let second = rank_listings(catalog(), profile);
            assert_eq!(first, second);
            assert!(first.len() <= MAX_RESULTS);
            assert!(first.windows(2).all(|w| w[0].score >= w[1].score));
            for result in &first {
                assert!(result.score <= MAX_SCORE);
                assert!(catalog().contains(&result.listing));
            }
            // Equal scores keep catalog order.
            for pair in first.windows(2) {
                if pair[0].score == pair[1].score {
                    assert!(pair[0].listing.id < pair[1].listing.id);
                }
            }
        }
    }
}
