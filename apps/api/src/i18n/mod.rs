//! Static English/Hindi string bundles and the form's option tables.
//!
//! Locale only selects labels. Keys (`graduate`, `dataScience`, skill names)
//! are identical across bundles and are what scoring sees.

use serde::{Deserialize, Serialize};

use crate::models::profile::{Education, Sector};

pub mod handlers;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "hi" => Some(Locale::Hi),
            _ => None,
        }
    }

    pub fn bundle(&self) -> &'static Bundle {
        match self {
            Locale::En => &EN,
            Locale::Hi => &HI,
        }
    }
}

/// Skill chips offered by the form, in display order. Not translated.
pub const SKILL_OPTIONS: &[&str] = &[
    "Python",
    "HTML",
    "CSS",
    "JavaScript",
    "SQL",
    "AWS",
    "React",
    "Node.js",
    "Java",
    "C++",
];

#[derive(Debug, Serialize)]
pub struct Bundle {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub start_now: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub sector: &'static str,
    pub location: &'static str,
    pub remote_ok: &'static str,
    pub next: &'static str,
    pub back: &'static str,
    pub recommendations: &'static str,
    pub apply_now: &'static str,
    pub why_recommended: &'static str,
    pub need_help: &'static str,
    pub dark_mode: &'static str,
    pub language: &'static str,
    /// Template with `{current}` and `{total}` placeholders.
    pub step: &'static str,
    #[serde(skip)]
    education_labels: [&'static str; 3],
    #[serde(skip)]
    sector_labels: [&'static str; 6],
}

static EN: Bundle = Bundle {
    title: "PM Internship Recommendation",
    subtitle: "Get your top 3–5 internship matches instantly.",
    start_now: "Start Now",
    education: "Education Level",
    skills: "Your Skills",
    sector: "Sector Interest",
    location: "Location Preference",
    remote_ok: "Remote OK",
    next: "Next",
    back: "Back",
    recommendations: "Your Recommendations",
    apply_now: "Apply on PM Internship Portal",
    why_recommended: "Why recommended",
    need_help: "Need help? Ask me.",
    dark_mode: "Dark Mode",
    language: "Language",
    step: "Step {current} of {total}",
    education_labels: ["Undergraduate", "Graduate", "Diploma"],
    sector_labels: [
        "Data Science",
        "Web Development",
        "Cloud Computing",
        "Cybersecurity",
        "Content Writing",
        "UI/UX Design",
    ],
};

static HI: Bundle = Bundle {
    title: "पीएम इंटर्नशिप सिफारिश",
    subtitle: "तुरंत अपने टॉप 3-5 इंटर्नशिप मैच पाएं।",
    start_now: "शुरू करें",
    education: "शिक्षा स्तर",
    skills: "आपके कौशल",
    sector: "क्षेत्र रुचि",
    location: "स्थान प्राथमिकता",
    remote_ok: "रिमोट ठीक है",
    next: "आगे",
    back: "पीछे",
    recommendations: "आपकी सिफारिशें",
    apply_now: "पीएम इंटर्नशिप पोर्टल पर आवेदन करें",
    why_recommended: "क्यों सिफारिश की गई",
    need_help: "मदद चाहिए? मुझसे पूछें।",
    dark_mode: "डार्क मोड",
    language: "भाषा",
    step: "चरण {current} का {total}",
    education_labels: ["स्नातक", "स्नातकोत्तर", "डिप्लोमा"],
    sector_labels: [
        "डेटा साइंस",
        "वेब डेवलपमेंट",
        "क्लाउड कंप्यूटिंग",
        "साइबर सिक्यूरिटी",
        "कंटेंट राइटिंग",
        "UI/UX डिज़ाइन",
    ],
};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionEntry {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub locale: Locale,
    pub education: Vec<OptionEntry>,
    pub sectors: Vec<OptionEntry>,
    pub skills: &'static [&'static str],
}

impl Bundle {
    pub fn education_label(&self, education: Education) -> &'static str {
        let idx = Education::ALL
            .iter()
            .position(|e| *e == education)
            .unwrap_or_default();
        self.education_labels[idx]
    }

    pub fn sector_label(&self, sector: Sector) -> &'static str {
        let idx = Sector::ALL
            .iter()
            .position(|s| *s == sector)
            .unwrap_or_default();
        self.sector_labels[idx]
    }

    pub fn step_label(&self, current: u8, total: u8) -> String {
        self.step
            .replace("{current}", &current.to_string())
            .replace("{total}", &total.to_string())
    }
}

pub fn form_options(locale: Locale) -> FormOptions {
    let bundle = locale.bundle();
    FormOptions {
        locale,
        education: Education::ALL
            .iter()
            .map(|e| OptionEntry {
                key: e.key(),
                label: bundle.education_label(*e),
            })
            .collect(),
        sectors: Sector::ALL
            .iter()
            .map(|s| OptionEntry {
                key: s.key(),
                label: bundle.sector_label(*s),
            })
            .collect(),
        skills: SKILL_OPTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_tables_keep_declared_order() {
        let options = form_options(Locale::En);
        let keys: Vec<&str> = options.sectors.iter().map(|o| o.key).collect();
        assert_eq!(
            keys,
            vec!["dataScience", "webDev", "cloud", "cybersecurity", "content", "design"]
        );
        assert_eq!(options.education[1].label, "Graduate");
    }

    #[test]
    fn test_keys_do_not_change_with_locale() {
        let en = form_options(Locale::En);
        let hi = form_options(Locale::Hi);
        let en_keys: Vec<&str> = en.education.iter().map(|o| o.key).collect();
        let hi_keys: Vec<&str> = hi.education.iter().map(|o| o.key).collect();
        assert_eq!(en_keys, hi_keys);
        assert_eq!(hi.education[0].label, "स्नातक");
        assert_eq!(en.skills, hi.skills);
    }

    #[test]
    fn test_step_label_interpolates() {
        assert_eq!(Locale::En.bundle().step_label(1, 2), "Step 1 of 2");
        assert_eq!(Locale::Hi.bundle().step_label(2, 2), "चरण 2 का 2");
    }

    #[test]
    fn test_locale_codes_round_trip() {
        assert_eq!(Locale::parse("hi"), Some(Locale::Hi));
        assert_eq!(Locale::parse(Locale::En.code()), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
    }
}
