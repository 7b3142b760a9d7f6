// src/models.rs
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the five portfolio sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    About,
    Tech,
    Arts,
    Volunteering,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Tech,
        Section::Arts,
        Section::Volunteering,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Tech => "tech",
            Section::Arts => "arts",
            Section::Volunteering => "volunteering",
            Section::Contact => "contact",
        }
    }

    /// Navigation label, also used as the page title.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Tech => "Tech",
            Section::Arts => "Arts",
            Section::Volunteering => "Volunteering",
            Section::Contact => "Contact",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Section::About => "/about",
            Section::Tech => "/tech",
            Section::Arts => "/arts",
            Section::Volunteering => "/volunteering",
            Section::Contact => "/contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Holds the section shown by the single-page view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSelector {
    active: Section,
}

impl SectionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Returns true when the active section changed.
    pub fn select(&mut self, section: Section) -> bool {
        if self.active == section {
            return false;
        }
        self.active = section;
        true
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}

// API models
#[derive(Debug, Serialize)]
pub struct SectionInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

impl From<Section> for SectionInfo {
    fn from(section: Section) -> Self {
        Self {
            id: section.id(),
            label: section.label(),
            path: section.path(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_about() {
        assert_eq!(Section::default(), Section::About);
        assert_eq!(SectionSelector::new().active(), Section::About);
    }

    #[test]
    fn test_parse_section() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(" Tech ".parse::<Section>(), Ok(Section::Tech));
        assert_eq!("CONTACT".parse::<Section>(), Ok(Section::Contact));
        assert!("blog".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_select_every_section_from_every_section() {
        for from in Section::ALL {
            for to in Section::ALL {
                let mut selector = SectionSelector::new();
                selector.select(from);
                let changed = selector.select(to);
                assert_eq!(changed, from != to);
                assert_eq!(selector.active(), to);
                for other in Section::ALL {
                    assert_eq!(selector.is_active(other), other == to);
                }
            }
        }
    }

    #[test]
    fn test_select_active_is_idempotent() {
        let mut selector = SectionSelector::new();
        assert!(selector.select(Section::Tech));
        let before = selector;
        assert!(!selector.select(Section::Tech));
        assert_eq!(selector, before);
    }

    #[test]
    fn test_section_info_serializes() {
        let json = serde_json::to_value(SectionInfo::from(Section::Volunteering)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "volunteering",
                "label": "Volunteering",
                "path": "/volunteering",
            })
        );
    }
}
